//! 계정 생명주기 서비스 모듈
//!
//! 등록, 로그인, 로그아웃, 토큰 갱신, 비밀번호 변경, 프로필/미디어 수정을 담당합니다.

pub mod account_service;

pub use account_service::AccountService;
