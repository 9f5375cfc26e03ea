//! Accounts Entity Module
//!
//! 계정 도메인의 핵심 엔티티를 정의하는 모듈입니다.
//!
//! # 주요 구성 요소
//!
//! - [`Account`] - 저장소에 영속되는 전체 계정 문서
//! - [`AccountProfile`] - 비밀번호 해시와 리프레시 토큰이 제거된 뷰
//! - [`NewAccount`], [`ProfileUpdate`] - 저장소 쓰기 입력
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::domain::entities::accounts::{AccountProfile, NewAccount};
//!
//! let account = store.create(NewAccount { /* ... */ }).await?;
//! let profile = AccountProfile::from(account);
//! ```

pub mod account;

pub use account::*;
