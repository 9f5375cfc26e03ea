//! 인증 관련 설정 모듈
//!
//! JWT 토큰 서명/만료 설정과 세션 쿠키 속성을 관리합니다.
//!
//! # 환경 변수
//!
//! ```bash
//! ACCESS_TOKEN_SECRET=access-secret
//! REFRESH_TOKEN_SECRET=refresh-secret
//! ACCESS_TOKEN_EXPIRY=15m
//! REFRESH_TOKEN_EXPIRY=10d
//! JWT_LEEWAY_SECONDS=0
//!
//! COOKIE_SECURE=true
//! COOKIE_SAME_SITE=lax
//! ```

use actix_web::cookie::{Cookie, SameSite};
use chrono::{Duration, Utc};

use super::{ConfigError, Environment, Lookup};

/// 액세스 토큰 쿠키 이름
pub const ACCESS_TOKEN_COOKIE: &str = "accessToken";
/// 리프레시 토큰 쿠키 이름
pub const REFRESH_TOKEN_COOKIE: &str = "refreshToken";

const DEV_ACCESS_SECRET: &str = "dev-access-secret-change-me";
const DEV_REFRESH_SECRET: &str = "dev-refresh-secret-change-me";

/// JWT 서명 및 만료 설정
///
/// 액세스 토큰과 리프레시 토큰은 서로 다른 비밀키로 서명되므로
/// 한쪽 토큰을 다른 쪽 용도로 사용할 수 없습니다.
#[derive(Clone)]
pub struct JwtConfig {
    pub access_secret: String,
    pub refresh_secret: String,
    pub access_ttl: Duration,
    pub refresh_ttl: Duration,
    /// 만료 검증 시 허용하는 시계 오차
    pub leeway: Duration,
}

impl std::fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtConfig")
            .field("access_secret", &"***")
            .field("refresh_secret", &"***")
            .field("access_ttl", &self.access_ttl)
            .field("refresh_ttl", &self.refresh_ttl)
            .field("leeway", &self.leeway)
            .finish()
    }
}

impl JwtConfig {
    pub fn load(lookup: Lookup<'_>, env: Environment) -> Result<Self, ConfigError> {
        let access_secret = secret(lookup, env, "ACCESS_TOKEN_SECRET", DEV_ACCESS_SECRET)?;
        let refresh_secret = secret(lookup, env, "REFRESH_TOKEN_SECRET", DEV_REFRESH_SECRET)?;

        if access_secret == refresh_secret {
            return Err(ConfigError::Invalid {
                key: "REFRESH_TOKEN_SECRET",
                reason: "액세스 토큰 비밀키와 달라야 합니다".to_string(),
            });
        }

        let access_ttl = ttl_or(lookup, "ACCESS_TOKEN_EXPIRY", Duration::minutes(15))?;
        let refresh_ttl = ttl_or(lookup, "REFRESH_TOKEN_EXPIRY", Duration::days(10))?;
        let leeway = ttl_or(lookup, "JWT_LEEWAY_SECONDS", Duration::zero())?;

        Ok(Self {
            access_secret,
            refresh_secret,
            access_ttl,
            refresh_ttl,
            leeway,
        })
    }
}

/// 세션 쿠키 속성
#[derive(Debug, Clone)]
pub struct CookieConfig {
    pub http_only: bool,
    pub secure: bool,
    pub same_site: SameSite,
    pub path: String,
    pub access_max_age: Duration,
    pub refresh_max_age: Duration,
}

impl CookieConfig {
    /// 쿠키 수명은 각 토큰의 만료 시간을 따릅니다.
    pub fn load(lookup: Lookup<'_>, jwt: &JwtConfig) -> Result<Self, ConfigError> {
        let secure = match lookup("COOKIE_SECURE") {
            Some(raw) => parse_bool("COOKIE_SECURE", &raw)?,
            None => true,
        };

        let same_site = match lookup("COOKIE_SAME_SITE") {
            Some(raw) => parse_same_site(&raw)?,
            None => SameSite::Lax,
        };

        Ok(Self {
            http_only: true,
            secure,
            same_site,
            path: "/".to_string(),
            access_max_age: jwt.access_ttl,
            refresh_max_age: jwt.refresh_ttl,
        })
    }

    pub fn access_cookie(&self, token: &str) -> Cookie<'static> {
        self.build(ACCESS_TOKEN_COOKIE, token.to_string(), self.access_max_age)
    }

    pub fn refresh_cookie(&self, token: &str) -> Cookie<'static> {
        self.build(REFRESH_TOKEN_COOKIE, token.to_string(), self.refresh_max_age)
    }

    /// 동일한 속성으로 즉시 만료되는 쿠키를 만듭니다.
    pub fn removal_cookie(&self, name: &'static str) -> Cookie<'static> {
        let mut cookie = self.build(name, String::new(), Duration::zero());
        cookie.make_removal();
        cookie
    }

    fn build(&self, name: &'static str, value: String, max_age: Duration) -> Cookie<'static> {
        Cookie::build(name, value)
            .http_only(self.http_only)
            .secure(self.secure)
            .same_site(self.same_site)
            .path(self.path.clone())
            .max_age(actix_web::cookie::time::Duration::seconds(max_age.num_seconds()))
            .finish()
    }
}

/// 기간 문자열을 파싱합니다.
///
/// `30s`, `15m`, `1h`, `10d` 형식 또는 단위 없는 초 단위 정수를 받습니다.
pub fn parse_duration(raw: &str) -> Option<Duration> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    let (digits, unit) = match raw.char_indices().last() {
        Some((idx, c)) if c.is_ascii_alphabetic() => (&raw[..idx], Some(c.to_ascii_lowercase())),
        _ => (raw, None),
    };

    let value: i64 = digits.trim().parse().ok()?;
    if value < 0 {
        return None;
    }

    match unit {
        None | Some('s') => Duration::try_seconds(value),
        Some('m') => Duration::try_minutes(value),
        Some('h') => Duration::try_hours(value),
        Some('d') => Duration::try_days(value),
        Some(_) => None,
    }
}

fn secret(
    lookup: Lookup<'_>,
    env: Environment,
    key: &'static str,
    dev_default: &str,
) -> Result<String, ConfigError> {
    match lookup(key).filter(|value| !value.trim().is_empty()) {
        Some(value) => Ok(value),
        None if env.is_production() => Err(ConfigError::Missing(key)),
        None => {
            log::warn!("{} 가 설정되지 않아 개발용 기본값을 사용합니다", key);
            Ok(dev_default.to_string())
        }
    }
}

fn duration_or(
    lookup: Lookup<'_>,
    key: &'static str,
    default: Duration,
) -> Result<Duration, ConfigError> {
    match lookup(key) {
        Some(raw) => parse_duration(&raw).ok_or_else(|| ConfigError::Invalid {
            key,
            reason: format!("기간 형식이 아닙니다: {}", raw),
        }),
        None => Ok(default),
    }
}

/// 현재 시각에 더해도 표현 가능한 기간만 허용합니다.
fn ttl_or(
    lookup: Lookup<'_>,
    key: &'static str,
    default: Duration,
) -> Result<Duration, ConfigError> {
    let ttl = duration_or(lookup, key, default)?;

    match Utc::now().checked_add_signed(ttl) {
        Some(_) => Ok(ttl),
        None => Err(ConfigError::Invalid {
            key,
            reason: format!("기간이 너무 깁니다: {}초", ttl.num_seconds()),
        }),
    }
}

fn parse_bool(key: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        other => Err(ConfigError::Invalid {
            key,
            reason: format!("불리언 값이 아닙니다: {}", other),
        }),
    }
}

fn parse_same_site(raw: &str) -> Result<SameSite, ConfigError> {
    match raw.trim().to_lowercase().as_str() {
        "strict" => Ok(SameSite::Strict),
        "lax" => Ok(SameSite::Lax),
        "none" => Ok(SameSite::None),
        other => Err(ConfigError::Invalid {
            key: "COOKIE_SAME_SITE",
            reason: format!("strict, lax, none 중 하나여야 합니다: {}", other),
        }),
    }
}
