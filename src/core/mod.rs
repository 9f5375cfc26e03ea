//! # Core Module
//!
//! 계정 서비스 전반에서 공유하는 핵심 구성 요소입니다.
//!
//! ## 모듈 구성
//!
//! ### [`errors`] - 통합 에러 처리
//! - **AppError**: 애플리케이션 전역 에러 타입
//! - **HTTP 통합**: Actix-Web `ResponseError` 구현으로 에러 엔벨로프 자동 변환
//! - **자동 변환**: MongoDB, validator 에러를 `?` 로 전파
//!
//! ### [`state`] - 애플리케이션 상태
//! - **AppState**: 시작 시점에 한 번 조립되어 `web::Data` 로 공유되는 서비스 묶음
//! - 전역 싱글톤 대신 생성자에 의존성을 명시적으로 주입합니다
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//! use crate::core::state::AppState;
//!
//! let state = AppState::new(accounts, cookies);
//! App::new()
//!     .app_data(web::Data::new(state))
//!     .configure(configure_all_routes);
//! ```

pub mod errors;
pub mod state;

pub use errors::*;
pub use state::*;
