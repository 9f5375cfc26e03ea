pub mod authenticated_account;

pub use authenticated_account::*;
