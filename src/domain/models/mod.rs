//! # Domain Models Module
//!
//! 영속되지 않는 도메인 모델과 값 객체를 정의합니다.
//!
//! ## Entities vs Models 구분
//!
//! ### Entities (`../entities/`)
//! - 데이터베이스에 직접 저장되는 객체 (`Account`)
//!
//! ### Models (`./`)
//! - [`token`] - JWT 클레임과 토큰 쌍. 서명된 문자열로만 존재하며 저장되지 않습니다.
//! - [`auth`] - 인증 미들웨어가 요청 컨텍스트에 첨부하는 인증된 계정

pub mod auth;
pub mod token;
