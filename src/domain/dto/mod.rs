//! # Data Transfer Objects (DTO) Module
//!
//! API 경계에서 데이터를 전송하기 위한 객체들을 정의하는 모듈입니다.
//! 클라이언트와 서버 간의 데이터 계약(Contract)을 명확히 정의합니다.
//!
//! ## 설계 원칙
//!
//! - **내부 표현 vs 외부 표현**: 엔티티는 직접 직렬화하지 않고 항상 응답 DTO로 변환합니다.
//! - **유효성 검증 내장**: JSON 요청은 `validator` derive로 필드 검증을 수행합니다.
//! - **일관된 엔벨로프**: 성공 응답은 [`common::ApiResponse`], 실패 응답은 `AppError`의 엔벨로프를 사용합니다.
//!
//! ## 모듈 구조
//!
//! ```text
//! dto/
//! ├── accounts/
//! │   ├── request/    # RegisterForm, LoginRequest, ChangePasswordRequest ...
//! │   └── response/   # AccountResponse, LoginResponse
//! └── common/         # ApiResponse, Empty
//! ```

pub mod accounts;
pub mod common;
