//! JWT 클레임 구조체 및 토큰 쌍
//!
//! 액세스 토큰과 리프레시 토큰은 서로 다른 클레임 구조와 서로 다른 비밀키를 사용합니다.
use serde::{Deserialize, Serialize};

use crate::domain::entities::accounts::Account;

/// 액세스 토큰 클레임
///
/// ## 클레임 구성
///
/// - `sub`: 계정 ID (ObjectId hex)
/// - `email`, `username`, `fullName`: 계정 식별 정보
/// - `iat`: 토큰 발급 시간 (Unix timestamp)
/// - `exp`: 토큰 만료 시간 (Unix timestamp)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessClaims {
    pub sub: String,
    pub email: String,
    pub username: String,
    pub full_name: String,
    pub iat: i64,
    pub exp: i64,
}

impl AccessClaims {
    pub fn for_account(account: &Account, iat: i64, exp: i64) -> Self {
        Self {
            sub: account.id_string(),
            email: account.email.clone(),
            username: account.username.clone(),
            full_name: account.full_name.clone(),
            iat,
            exp,
        }
    }
}

/// 리프레시 토큰 클레임
///
/// 계정 ID만 담습니다. `jti`는 같은 초에 발급된 두 토큰도 서로 다르게 만듭니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RefreshClaims {
    pub sub: String,
    pub jti: String,
    pub iat: i64,
    pub exp: i64,
}

/// 만료 검증에 필요한 공통 클레임 접근자
pub trait ExpiringClaims {
    fn subject(&self) -> &str;
    fn expires_at(&self) -> i64;
}

impl ExpiringClaims for AccessClaims {
    fn subject(&self) -> &str {
        &self.sub
    }

    fn expires_at(&self) -> i64 {
        self.exp
    }
}

impl ExpiringClaims for RefreshClaims {
    fn subject(&self) -> &str {
        &self.sub
    }

    fn expires_at(&self) -> i64 {
        self.exp
    }
}

/// 클라이언트에게 전달되는 토큰 쌍
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
    /// 액세스 토큰 만료까지 남은 시간 (초)
    pub expires_in: i64,
}
