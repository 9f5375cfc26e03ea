//! # 유틸리티 모듈
//!
//! - [`string_utils`] - 입력 문자열 정리와 식별자 정규화
//! - [`password`] - bcrypt 기반 패스워드 해싱

pub mod password;
pub mod string_utils;
