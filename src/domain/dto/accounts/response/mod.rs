//! 계정 응답 DTO

pub mod account_response;

pub use account_response::*;
