use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::accounts::AccountProfile;
use crate::domain::models::token::TokenPair;

/// 계정 응답 DTO
///
/// 정제된 프로필에서만 만들어지므로 비밀번호 해시나 리프레시 토큰이 들어갈 수 없습니다.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountResponse {
    pub id: String,
    pub username: String,
    pub email: String,
    pub full_name: String,
    pub avatar_url: String,
    pub cover_image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<AccountProfile> for AccountResponse {
    fn from(profile: AccountProfile) -> Self {
        let AccountProfile {
            id,
            username,
            email,
            full_name,
            avatar_url,
            cover_image_url,
            created_at,
            updated_at,
        } = profile;

        Self {
            id: id.to_hex(),
            username,
            email,
            full_name,
            avatar_url,
            cover_image_url,
            created_at: DateTime::<Utc>::from(created_at.to_system_time()),
            updated_at: DateTime::<Utc>::from(updated_at.to_system_time()),
        }
    }
}

/// 로그인 응답 DTO (JWT 토큰 포함)
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub user: AccountResponse,
    pub access_token: String,
    pub refresh_token: String,
    pub expires_in: i64,
}

impl LoginResponse {
    pub fn new(profile: AccountProfile, tokens: TokenPair) -> Self {
        Self {
            user: AccountResponse::from(profile),
            access_token: tokens.access_token,
            refresh_token: tokens.refresh_token,
            expires_in: tokens.expires_in,
        }
    }
}
