//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 모든 서비스는 시작 시점에 생성자 주입으로 조립되어 [`AppState`]에 담깁니다.
//!
//! - `accounts`: 등록, 로그인, 로그아웃, 비밀번호 변경, 프로필/미디어 수정
//! - `auth`: JWT 발급/검증과 리프레시 토큰 회전
//! - `media`: 외부 오브젝트 스토리지 업로드
//!
//! [`AppState`]: crate::core::state::AppState
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::{accounts::AccountService, auth::TokenService};
//!
//! let tokens = Arc::new(TokenService::new(codec, store.clone()));
//! let accounts = Arc::new(AccountService::new(store, tokens, uploader, hasher, max_file_size));
//! ```

pub mod accounts;
pub mod auth;
pub mod media;
