//! JWT 토큰 발급/검증
//!
//! HS256으로 서명하며, 액세스 토큰과 리프레시 토큰은 서로 다른 비밀키를 사용합니다.
//! 만료 검증은 라이브러리 대신 주입된 [`Clock`] 기준으로 수행합니다.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::clock::Clock;
use crate::config::JwtConfig;
use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::accounts::Account;
use crate::domain::models::token::{AccessClaims, ExpiringClaims, RefreshClaims};

/// 토큰 발급/검증 기능
///
/// 서비스 계층은 이 trait에만 의존하므로 테스트에서 시계와 비밀키를 자유롭게 바꿀 수 있습니다.
pub trait TokenCodec: Send + Sync {
    fn issue_access_token(&self, account: &Account) -> AppResult<String>;

    fn issue_refresh_token(&self, account: &Account) -> AppResult<String>;

    fn verify_access_token(&self, token: &str) -> AppResult<AccessClaims>;

    fn verify_refresh_token(&self, token: &str) -> AppResult<RefreshClaims>;

    /// 액세스 토큰 수명 (초)
    fn access_ttl_seconds(&self) -> i64;
}

pub struct JwtCodec {
    config: JwtConfig,
    clock: Arc<dyn Clock>,
}

impl JwtCodec {
    pub fn new(config: JwtConfig, clock: Arc<dyn Clock>) -> Self {
        Self { config, clock }
    }

    fn sign<C: Serialize>(&self, claims: &C, secret: &str) -> AppResult<String> {
        encode(
            &Header::new(Algorithm::HS256),
            claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .map_err(|e| AppError::InternalError(format!("JWT 토큰 생성 실패: {}", e)))
    }

    fn expires_at(&self, now: DateTime<Utc>, ttl: Duration) -> AppResult<i64> {
        now.checked_add_signed(ttl)
            .map(|at| at.timestamp())
            .ok_or_else(|| AppError::InternalError("토큰 만료 시각을 계산할 수 없습니다".to_string()))
    }

    /// 서명과 만료를 검증하고 클레임을 반환합니다.
    ///
    /// 어떤 이유로든 검증에 실패하면 `InvalidToken`을 반환합니다.
    pub fn verify<C>(&self, token: &str, secret: &str) -> AppResult<C>
    where
        C: DeserializeOwned + ExpiringClaims,
    {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.set_required_spec_claims(&["exp", "sub"]);

        let claims = decode::<C>(token, &DecodingKey::from_secret(secret.as_bytes()), &validation)
            .map(|data| data.claims)
            .map_err(|e| {
                let reason = match e.kind() {
                    ErrorKind::InvalidSignature => "토큰 서명이 올바르지 않습니다".to_string(),
                    ErrorKind::InvalidToken | ErrorKind::Base64(_) | ErrorKind::Json(_) => {
                        "토큰 형식이 올바르지 않습니다".to_string()
                    }
                    _ => format!("토큰 검증 실패: {}", e),
                };
                AppError::InvalidToken(reason)
            })?;

        let now = self.clock.now().timestamp();
        if now > claims.expires_at().saturating_add(self.config.leeway.num_seconds()) {
            return Err(AppError::InvalidToken("토큰이 만료되었습니다".to_string()));
        }

        Ok(claims)
    }
}

impl TokenCodec for JwtCodec {
    fn issue_access_token(&self, account: &Account) -> AppResult<String> {
        let now = self.clock.now();
        let expires_at = self.expires_at(now, self.config.access_ttl)?;
        let claims = AccessClaims::for_account(account, now.timestamp(), expires_at);

        self.sign(&claims, &self.config.access_secret)
    }

    fn issue_refresh_token(&self, account: &Account) -> AppResult<String> {
        let now = self.clock.now();
        let claims = RefreshClaims {
            sub: account.id_string(),
            jti: uuid::Uuid::new_v4().to_string(),
            iat: now.timestamp(),
            exp: self.expires_at(now, self.config.refresh_ttl)?,
        };

        self.sign(&claims, &self.config.refresh_secret)
    }

    fn verify_access_token(&self, token: &str) -> AppResult<AccessClaims> {
        self.verify(token, &self.config.access_secret)
    }

    fn verify_refresh_token(&self, token: &str) -> AppResult<RefreshClaims> {
        self.verify(token, &self.config.refresh_secret)
    }

    fn access_ttl_seconds(&self) -> i64 {
        self.config.access_ttl.num_seconds()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::auth::clock::FixedClock;
    use crate::test_support::{jwt_config, sample_account};

    fn account() -> Account {
        sample_account("alice", "a@x.com")
    }

    fn codec() -> (JwtCodec, Arc<FixedClock>) {
        let clock = Arc::new(FixedClock::new());
        (JwtCodec::new(jwt_config(), clock.clone()), clock)
    }

    #[test]
    fn test_access_token_carries_identity() {
        let (codec, _) = codec();
        let account = account();

        let token = codec.issue_access_token(&account).unwrap();
        let claims = codec.verify_access_token(&token).unwrap();

        assert_eq!(claims.sub, account.id_string());
        assert_eq!(claims.email, "a@x.com");
        assert_eq!(claims.username, "alice");
        assert_eq!(claims.full_name, "Alice A");
        assert_eq!(claims.exp - claims.iat, 15 * 60);
    }

    #[test]
    fn test_access_token_expires() {
        let (codec, clock) = codec();
        let token = codec.issue_access_token(&account()).unwrap();

        clock.advance(Duration::minutes(15));
        assert!(codec.verify_access_token(&token).is_ok());

        clock.advance(Duration::seconds(1));
        let err = codec.verify_access_token(&token).unwrap_err();
        assert!(matches!(err, AppError::InvalidToken(msg) if msg.contains("만료")));
    }

    #[test]
    fn test_secrets_are_not_interchangeable() {
        let (codec, _) = codec();
        let account = account();

        let access = codec.issue_access_token(&account).unwrap();
        let refresh = codec.issue_refresh_token(&account).unwrap();

        assert!(matches!(codec.verify_refresh_token(&access), Err(AppError::InvalidToken(_))));
        assert!(matches!(codec.verify_access_token(&refresh), Err(AppError::InvalidToken(_))));
    }

    #[test]
    fn test_refresh_tokens_issued_together_differ() {
        let (codec, _) = codec();
        let account = account();

        let first = codec.issue_refresh_token(&account).unwrap();
        let second = codec.issue_refresh_token(&account).unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn test_unrepresentable_expiry_is_an_internal_error() {
        let clock = Arc::new(FixedClock::new());
        let mut config = jwt_config();
        config.refresh_ttl = Duration::try_days(100_000_000).unwrap();
        let codec = JwtCodec::new(config, clock);

        let err = codec.issue_refresh_token(&account()).unwrap_err();
        assert!(matches!(err, AppError::InternalError(_)));
        assert!(codec.issue_access_token(&account()).is_ok());
    }

    #[test]
    fn test_garbage_is_invalid() {
        let (codec, _) = codec();
        assert!(matches!(
            codec.verify_access_token("not.a.jwt"),
            Err(AppError::InvalidToken(_))
        ));
    }
}
