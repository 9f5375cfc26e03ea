//! 계정 관련 DTO
//!
//! ```text
//! accounts/
//! ├── request/    # 클라이언트 → 서버 (multipart 등록 폼, 로그인, 비밀번호 변경 등)
//! └── response/   # 서버 → 클라이언트 (정제된 계정, 로그인 결과)
//! ```

pub mod request;
pub mod response;

pub use request::*;
pub use response::*;
