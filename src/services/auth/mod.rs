//! 인증 및 세션 토큰 서비스 모듈
//!
//! JWT 기반 액세스/리프레시 토큰의 발급, 검증, 회전, 폐기를 담당합니다.
//!
//! # Security
//!
//! - HMAC-SHA256 토큰 서명, 액세스/리프레시 토큰별 별도 비밀키
//! - 리프레시 토큰은 SHA-256 digest로만 저장
//! - 회전 시 compare-and-swap으로 재사용 토큰 탐지
//!
//! # Examples
//!
//! ```rust,ignore
//! use account_service::services::auth::{JwtCodec, SystemClock, TokenService};
//!
//! let codec = Arc::new(JwtCodec::new(config.jwt.clone(), Arc::new(SystemClock)));
//! let tokens = TokenService::new(codec, store.clone());
//! let pair = tokens.issue_token_pair(&account.id).await?;
//! ```

pub mod clock;
pub mod jwt_codec;
pub mod token_service;

pub use clock::*;
pub use jwt_codec::*;
pub use token_service::*;
