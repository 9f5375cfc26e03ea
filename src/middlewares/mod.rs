//! 미들웨어 모듈
//!
//! ActixWeb 애플리케이션의 요청 처리 파이프라인에서 사용되는 미들웨어들을 제공합니다.
//!
//! # 제공 미들웨어
//!
//! ### 인증 미들웨어 (AuthMiddleware)
//! - `accessToken` 쿠키, 없으면 `Authorization: Bearer` 헤더에서 토큰 추출
//! - 액세스 토큰 검증 후 비밀번호 해시와 리프레시 토큰을 제외한 계정 조회
//! - 계정 정보를 request extension에 [`AuthenticatedAccount`]로 저장
//! - 실패 시 핸들러를 호출하지 않고 401 에러 엔벨로프로 응답
//!
//! [`AuthenticatedAccount`]: crate::domain::models::auth::AuthenticatedAccount
//!
//! # 사용 방법
//!
//! ```rust,ignore
//! use actix_web::{post, HttpResponse};
//! use crate::middlewares::AuthMiddleware;
//!
//! #[post("/logout", wrap = "AuthMiddleware::required()")]
//! async fn logout(account: AuthenticatedAccount) -> AppResult<HttpResponse> {
//!     // ...
//! }
//! ```

pub mod auth_middleware;
mod auth_inner;

// 미들웨어 재export
pub use auth_middleware::AuthMiddleware;
