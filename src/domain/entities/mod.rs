//! # Domain Entities Module
//!
//! MongoDB 문서와 직접 매핑되는 영속 엔티티를 정의합니다.
//!
//! ## 엔티티 설계 원칙
//!
//! - **ObjectId 식별**: `_id` 필드는 생성 시점에 애플리케이션에서 발급합니다.
//! - **BSON 시간**: `created_at`, `updated_at`은 `bson::DateTime`으로 저장합니다.
//! - **민감 정보 분리**: 응답이나 요청 컨텍스트에는 항상 정제된 뷰(`AccountProfile`)를 사용합니다.

pub mod accounts;
