//! 데이터 및 서버 설정 관리 모듈
//!
//! 데이터베이스, 서버, 환경, 요청 제한 및 보안 관련 설정을 관리합니다.

use super::{ConfigError, Lookup};

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    /// 개발 환경 - 빠른 개발을 위한 설정
    Development,
    /// 테스트 환경 - 자동화된 테스트용 설정
    Test,
    /// 스테이징 환경 - 프로덕션 유사 환경
    Staging,
    /// 프로덕션 환경 - 최고 수준의 보안 및 성능
    Production,
}

impl Environment {
    /// 현재 실행 환경을 감지합니다.
    ///
    /// `ENVIRONMENT` 또는 `NODE_ENV` 값을 확인하며,
    /// 설정되지 않은 경우 `Production`을 기본값으로 사용합니다.
    pub fn detect(lookup: Lookup<'_>) -> Self {
        let raw = lookup("ENVIRONMENT")
            .or_else(|| lookup("NODE_ENV"))
            .unwrap_or_else(|| "production".to_string());
        Self::from_str(&raw)
    }

    /// 문자열에서 Environment를 생성합니다.
    ///
    /// 대소문자를 구분하지 않으며, 알 수 없는 값인 경우 `Production`을 반환합니다.
    pub fn from_str(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }
}

/// 패스워드 해싱 설정
#[derive(Debug, Clone, Copy)]
pub struct PasswordConfig {
    pub bcrypt_cost: u32,
}

impl PasswordConfig {
    /// `BCRYPT_COST`(4-15)가 유효하면 사용하고, 아니면 환경별 기본값을 사용합니다.
    pub fn load(lookup: Lookup<'_>, env: Environment) -> Self {
        let bcrypt_cost = lookup("BCRYPT_COST")
            .and_then(|raw| raw.parse::<u32>().ok())
            .filter(|cost| (4..=15).contains(cost))
            .unwrap_or_else(|| Self::bcrypt_cost_for_env(&env));

        Self { bcrypt_cost }
    }

    /// 특정 환경에 대한 bcrypt cost를 반환합니다.
    ///
    /// - Development/Test: 4 (빠른 처리)
    /// - Staging: 10 (중간 보안)
    /// - Production: 12 (고보안)
    pub fn bcrypt_cost_for_env(env: &Environment) -> u32 {
        match env {
            Environment::Development => 4,
            Environment::Test => 4,
            Environment::Staging => 10,
            Environment::Production => 12,
        }
    }
}

/// 서버 바인딩 설정
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: usize,
}

impl ServerConfig {
    /// `HOST`(기본 0.0.0.0), `PORT`(기본 8000), `SERVER_WORKERS`(기본 4)
    pub fn load(lookup: Lookup<'_>) -> Result<Self, ConfigError> {
        Ok(Self {
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: parse_or("PORT", lookup, 8000)?,
            workers: parse_or("SERVER_WORKERS", lookup, 4)?,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// MongoDB 연결 설정
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub uri: String,
    pub database_name: String,
    pub app_name: String,
}

impl DatabaseConfig {
    pub fn load(lookup: Lookup<'_>) -> Self {
        Self {
            uri: lookup("MONGODB_URI").unwrap_or_else(|| "mongodb://localhost:27017".to_string()),
            database_name: lookup("DATABASE_NAME").unwrap_or_else(|| "account_service".to_string()),
            app_name: "account_service".to_string(),
        }
    }
}

/// Rate Limiting 설정
#[derive(Debug, Clone, Copy)]
pub struct RateLimitConfig {
    pub per_second: u64,
    pub burst_size: u32,
}

impl RateLimitConfig {
    /// `RATE_LIMIT_PER_SECOND`(기본 100), `RATE_LIMIT_BURST_SIZE`(기본 200)
    pub fn load(lookup: Lookup<'_>) -> Result<Self, ConfigError> {
        Ok(Self {
            per_second: parse_or("RATE_LIMIT_PER_SECOND", lookup, 100)?,
            burst_size: parse_or("RATE_LIMIT_BURST_SIZE", lookup, 200)?,
        })
    }
}

/// CORS 허용 Origin 설정
#[derive(Debug, Clone)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

impl CorsConfig {
    /// `CORS_ORIGINS` 를 쉼표로 분리합니다. 없으면 로컬 개발 Origin을 허용합니다.
    pub fn load(lookup: Lookup<'_>) -> Self {
        let allowed_origins = match lookup("CORS_ORIGINS") {
            Some(raw) => raw
                .split(',')
                .map(str::trim)
                .filter(|origin| !origin.is_empty())
                .map(str::to_string)
                .collect(),
            None => vec![
                "http://localhost:3000".to_string(),
                "http://127.0.0.1:3000".to_string(),
            ],
        };

        Self { allowed_origins }
    }
}

pub(crate) fn parse_or<T>(key: &'static str, lookup: Lookup<'_>, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse::<T>().map_err(|_| ConfigError::Invalid {
            key,
            reason: format!("숫자로 해석할 수 없습니다: {}", raw),
        }),
        None => Ok(default),
    }
}
