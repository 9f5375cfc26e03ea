//! 계정 요청 DTO

pub mod auth_request;
pub mod media_request;
pub mod register_request;
pub mod update_account_request;

pub use auth_request::*;
pub use media_request::*;
pub use register_request::*;
pub use update_account_request::*;
