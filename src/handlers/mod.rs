//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Handlers (이 모듈) - HTTP 엔드포인트 처리         ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Services - 비즈니스 로직                        ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   Repositories - 데이터 접근                     ← Repository Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! 핸들러는 `web::Data<AppState>`에서 서비스를 꺼내 호출하고, 결과를 응답 엔벨로프로 감쌉니다.
//! 에러는 `AppError`로 전파되어 `ResponseError` 구현이 에러 엔벨로프로 변환합니다.
//!
//! - **`users`**: 계정 등록, 로그인/로그아웃, 토큰 갱신, 프로필 관리
//! - **`health`**: 헬스체크

pub mod health;
pub mod users;
