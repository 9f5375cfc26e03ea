//! 계정 서비스 백엔드
//!
//! 회원 가입, 로그인/로그아웃, JWT 액세스/리프레시 토큰 발급과 회전,
//! 비밀번호 변경, 프로필 및 아바타/커버 이미지 관리를 제공하는 actix-web 서비스입니다.
//!
//! # Features
//!
//! - **계정 관리**: multipart 등록, 프로필 수정, 미디어 교체
//! - **JWT 인증**: 쿠키 또는 Bearer 헤더 기반 액세스 토큰 검증
//! - **세션 회전**: 계정당 하나의 리프레시 토큰, compare-and-swap 회전
//! - **MongoDB**: 계정 데이터 영구 저장
//! - **Cloudinary**: 서명된 미디어 업로드
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ Auth Middleware │ ← 액세스 토큰 검증
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 비즈니스 로직
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐   ┌─────────────────┐
//! │  Repositories   │   │  Media Uploader │
//! └─────────────────┘   └─────────────────┘
//!          │                     │
//!          ▼                     ▼
//! ┌─────────────────┐   ┌─────────────────┐
//! │     MongoDB     │   │   Cloudinary    │
//! └─────────────────┘   └─────────────────┘
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod middlewares;

#[cfg(test)]
mod test_support;
