//! # Domain Layer Module
//!
//! 도메인 계층을 구성하는 핵심 모듈로, 계정 데이터 구조와 API 계약을 담당합니다.
//!
//! ## 아키텍처 개요
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── Entities      - 영속 객체 (Account, AccountProfile)
//! ├── DTOs          - 데이터 전송 객체 (Request/Response)
//! └── Models        - 토큰 클레임, 인증된 계정
//!      │
//!      ▼
//! Application Layer (Services)
//!      │
//!      ▼
//! Infrastructure Layer (Repositories, DB, Media)
//! ```
//!
//! ## 모듈 구성
//!
//! ### [`entities`] - 핵심 도메인 엔티티
//!
//! MongoDB에 저장되는 계정 문서입니다. 비밀번호 해싱은 엔티티가 아니라
//! 저장소의 생성/수정 경로에서 수행됩니다.
//!
//! ### [`dto`] - 데이터 전송 객체
//!
//! multipart 등록 폼, JSON 요청, 성공 응답 엔벨로프를 정의합니다.
//!
//! ### [`models`] - 도메인 모델
//!
//! 저장되지 않는 값 객체입니다. JWT 클레임과 요청 컨텍스트의 인증된 계정을 포함합니다.

pub mod dto;
pub mod entities;
pub mod models;
