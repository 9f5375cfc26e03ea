//! # Configuration Module
//!
//! 계정 서비스의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반의 설정값들을 [`AppConfig`] 하나로 모아 시작 시점에 한 번 읽습니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 데이터베이스, 서버, 환경, 요청 제한 관련 설정
//! - [`auth_config`] - JWT 및 세션 쿠키 관련 설정
//!
//! ## 설계 원칙
//!
//! ### 1. 환경 분리 (Environment Separation)
//!
//! 개발, 테스트, 스테이징, 프로덕션 환경별로 다른 기본값을 제공합니다.
//!
//! ### 2. 보안 우선 (Security First)
//!
//! - 민감한 정보는 환경 변수로만 제공
//! - 기본값은 개발 환경에서만 안전
//! - 프로덕션에서는 필수 설정값 누락 시 [`ConfigError`] 반환
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use account_service::config::AppConfig;
//!
//! let config = AppConfig::from_env()?;
//! println!("bind: {}", config.server.bind_address());
//! ```
//!
//! ## 환경 변수 설정 가이드
//!
//! ### 필수 환경 변수 (프로덕션)
//!
//! ```bash
//! export ACCESS_TOKEN_SECRET="access-secret"
//! export REFRESH_TOKEN_SECRET="refresh-secret"
//! export CLOUDINARY_CLOUD_NAME="demo"
//! export CLOUDINARY_API_KEY="123456"
//! export CLOUDINARY_API_SECRET="cloud-secret"
//! ```
//!
//! ### 선택적 환경 변수
//!
//! ```bash
//! export ENVIRONMENT="production"  # development, test, staging, production
//! export PORT="8000"
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="account_service"
//! export BCRYPT_COST="12"          # 4-15 범위
//! export UPLOAD_TEMP_DIR="./public/temp"
//! ```

pub mod auth_config;
pub mod data_config;

pub use auth_config::*;
pub use data_config::*;

use std::path::PathBuf;
use thiserror::Error;

/// 설정 키 조회 함수
///
/// 테스트에서는 환경 변수 대신 `HashMap` 기반 클로저를 넘깁니다.
pub type Lookup<'a> = &'a dyn Fn(&str) -> Option<String>;

/// 설정 로딩 실패
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("필수 환경 변수가 없습니다: {0}")]
    Missing(&'static str),

    #[error("{key} 값이 올바르지 않습니다: {reason}")]
    Invalid { key: &'static str, reason: String },
}

/// Cloudinary 호환 미디어 저장소 설정
#[derive(Clone)]
pub struct MediaConfig {
    pub cloud_name: String,
    pub api_key: String,
    pub api_secret: String,
    /// 업로드 API 기본 주소 (테스트에서는 mock 서버 주소로 교체)
    pub base_url: String,
    pub folder: Option<String>,
    /// multipart 업로드가 임시로 저장되는 디렉터리
    pub temp_dir: PathBuf,
    pub max_file_size: usize,
}

impl std::fmt::Debug for MediaConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MediaConfig")
            .field("cloud_name", &self.cloud_name)
            .field("api_key", &self.api_key)
            .field("api_secret", &"***")
            .field("base_url", &self.base_url)
            .field("folder", &self.folder)
            .field("temp_dir", &self.temp_dir)
            .field("max_file_size", &self.max_file_size)
            .finish()
    }
}

impl MediaConfig {
    pub const DEFAULT_BASE_URL: &'static str = "https://api.cloudinary.com/v1_1";
    pub const DEFAULT_MAX_FILE_SIZE: usize = 10 * 1024 * 1024;
    /// multipart 요청 전체 크기 상한 (avatar + coverImage + 텍스트 필드)
    pub const MAX_REQUEST_SIZE: usize = 25 * 1024 * 1024;

    pub fn load(lookup: Lookup<'_>, env: Environment) -> Result<Self, ConfigError> {
        let required = |key: &'static str| -> Result<String, ConfigError> {
            match lookup(key).filter(|value| !value.trim().is_empty()) {
                Some(value) => Ok(value),
                None if env.is_production() => Err(ConfigError::Missing(key)),
                None => {
                    log::warn!("{} 가 설정되지 않았습니다. 미디어 업로드가 실패합니다", key);
                    Ok(String::new())
                }
            }
        };

        let max_file_size =
            parse_or("UPLOAD_MAX_FILE_SIZE", lookup, Self::DEFAULT_MAX_FILE_SIZE)?;
        if max_file_size == 0 || max_file_size > Self::MAX_REQUEST_SIZE {
            return Err(ConfigError::Invalid {
                key: "UPLOAD_MAX_FILE_SIZE",
                reason: format!("1 이상 {} 이하여야 합니다", Self::MAX_REQUEST_SIZE),
            });
        }

        Ok(Self {
            cloud_name: required("CLOUDINARY_CLOUD_NAME")?,
            api_key: required("CLOUDINARY_API_KEY")?,
            api_secret: required("CLOUDINARY_API_SECRET")?,
            base_url: lookup("CLOUDINARY_BASE_URL")
                .unwrap_or_else(|| Self::DEFAULT_BASE_URL.to_string()),
            folder: lookup("CLOUDINARY_FOLDER").filter(|folder| !folder.trim().is_empty()),
            temp_dir: PathBuf::from(
                lookup("UPLOAD_TEMP_DIR").unwrap_or_else(|| "./public/temp".to_string()),
            ),
            max_file_size,
        })
    }
}

/// 애플리케이션 전체 설정
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: Environment,
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub jwt: JwtConfig,
    pub cookies: CookieConfig,
    pub password: PasswordConfig,
    pub media: MediaConfig,
    pub rate_limit: RateLimitConfig,
    pub cors: CorsConfig,
}

impl AppConfig {
    /// 프로세스 환경 변수에서 설정을 읽습니다.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(&|key: &str| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: Lookup<'_>) -> Result<Self, ConfigError> {
        let environment = Environment::detect(lookup);
        let jwt = JwtConfig::load(lookup, environment)?;
        let cookies = CookieConfig::load(lookup, &jwt)?;

        Ok(Self {
            environment,
            server: ServerConfig::load(lookup)?,
            database: DatabaseConfig::load(lookup),
            password: PasswordConfig::load(lookup, environment),
            media: MediaConfig::load(lookup, environment)?,
            rate_limit: RateLimitConfig::load(lookup)?,
            cors: CorsConfig::load(lookup),
            jwt,
            cookies,
        })
    }
}
