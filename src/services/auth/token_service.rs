//! 세션 토큰 수명주기 서비스
//!
//! 토큰 쌍 발급, 리프레시 토큰 회전, 폐기를 담당합니다.
//!
//! ## 리프레시 토큰 검증 모델
//!
//! 서명은 토큰의 진위를, 저장된 digest와의 비교는 현재 유효성을 증명합니다.
//! 계정당 하나의 digest만 저장되므로 덮어쓰기나 제거만으로 이전 토큰이 모두 무효화됩니다.
//!
//! ```text
//! login ──▶ issue_token_pair ──▶ refresh_token_hash = sha256(R1)
//! refresh(R1) ──▶ rotate ──▶ CAS(sha256(R1) → sha256(R2))
//! refresh(R1) ──▶ rotate ──▶ TokenMismatch
//! logout ──▶ revoke ──▶ refresh_token_hash 제거
//! ```

use std::sync::Arc;

use mongodb::bson::oid::ObjectId;
use sha2::{Digest, Sha256};

use super::jwt_codec::TokenCodec;
use crate::core::errors::{AppError, AppResult, ErrorContext};
use crate::domain::entities::accounts::Account;
use crate::domain::models::token::{AccessClaims, TokenPair};
use crate::repositories::accounts::AccountStore;

/// 저장용 리프레시 토큰 digest (SHA-256, hex)
pub fn token_digest(token: &str) -> String {
    format!("{:x}", Sha256::digest(token.as_bytes()))
}

pub struct TokenService {
    codec: Arc<dyn TokenCodec>,
    store: Arc<dyn AccountStore>,
}

impl TokenService {
    pub fn new(codec: Arc<dyn TokenCodec>, store: Arc<dyn AccountStore>) -> Self {
        Self { codec, store }
    }

    fn sign_pair(&self, account: &Account) -> AppResult<TokenPair> {
        Ok(TokenPair {
            access_token: self.codec.issue_access_token(account)?,
            refresh_token: self.codec.issue_refresh_token(account)?,
            expires_in: self.codec.access_ttl_seconds(),
        })
    }

    /// 계정을 조회하여 토큰 쌍을 발급하고, 새 리프레시 토큰을 저장합니다.
    ///
    /// 기존에 저장된 리프레시 토큰은 덮어써집니다.
    pub async fn issue_token_pair(&self, account_id: &ObjectId) -> AppResult<TokenPair> {
        let account = self
            .store
            .find_by_id(account_id)
            .await
            .context("토큰 발급 중 계정 조회 실패")?
            .ok_or_else(|| {
                AppError::InternalError(format!("토큰 발급 대상 계정이 없습니다: {}", account_id))
            })?;

        let pair = self.sign_pair(&account)?;

        let saved = self
            .store
            .set_refresh_token(account_id, Some(token_digest(&pair.refresh_token)))
            .await
            .context("리프레시 토큰 저장 실패")?;
        if !saved {
            return Err(AppError::InternalError(format!(
                "리프레시 토큰을 저장할 계정이 없습니다: {}",
                account_id
            )));
        }

        log::info!("토큰 발급: {}", account.username);
        Ok(pair)
    }

    pub fn verify_access_token(&self, token: &str) -> AppResult<AccessClaims> {
        self.codec.verify_access_token(token)
    }

    /// 리프레시 토큰을 검증하고 새 토큰 쌍으로 교체합니다.
    ///
    /// - 서명/만료 실패, 존재하지 않는 계정: `InvalidToken`
    /// - 저장된 토큰과 불일치 (이미 교체되었거나 폐기된 토큰): `TokenMismatch`
    pub async fn rotate(&self, presented: &str) -> AppResult<TokenPair> {
        let claims = self.codec.verify_refresh_token(presented)?;

        let account_id = ObjectId::parse_str(&claims.sub)
            .map_err(|_| AppError::InvalidToken("토큰의 계정 ID가 올바르지 않습니다".to_string()))?;

        let account = self
            .store
            .find_by_id(&account_id)
            .await?
            .ok_or_else(|| AppError::InvalidToken("토큰의 계정이 존재하지 않습니다".to_string()))?;

        let presented_digest = token_digest(presented);
        if account.refresh_token_hash.as_deref() != Some(presented_digest.as_str()) {
            log::warn!("리프레시 토큰 불일치 (재사용 의심): {}", account.username);
            return Err(AppError::TokenMismatch(
                "리프레시 토큰이 만료되었거나 이미 사용되었습니다".to_string(),
            ));
        }

        let pair = self.sign_pair(&account)?;

        // 같은 토큰으로 동시에 들어온 요청 중 하나만 교체에 성공합니다.
        let swapped = self
            .store
            .swap_refresh_token(&account_id, &presented_digest, token_digest(&pair.refresh_token))
            .await?;
        if !swapped {
            log::warn!("리프레시 토큰 동시 교체 감지: {}", account.username);
            return Err(AppError::TokenMismatch(
                "리프레시 토큰이 만료되었거나 이미 사용되었습니다".to_string(),
            ));
        }

        log::info!("토큰 갱신: {}", account.username);
        Ok(pair)
    }

    /// 저장된 리프레시 토큰을 제거하여 발급된 모든 리프레시 토큰을 무효화합니다.
    pub async fn revoke(&self, account_id: &ObjectId) -> AppResult<()> {
        let found = self.store.set_refresh_token(account_id, None).await?;
        if !found {
            log::warn!("토큰 폐기 대상 계정이 없습니다: {}", account_id);
        }
        Ok(())
    }
}
