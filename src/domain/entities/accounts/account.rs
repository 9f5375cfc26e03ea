//! Account Entity Implementation
//!
//! 계정 엔티티와 민감 정보가 제거된 프로필 뷰를 정의합니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// 계정 엔티티
///
/// `accounts` 컬렉션의 문서와 1:1로 대응합니다.
/// `username`, `email`은 저장 전에 소문자/공백 제거로 정규화되며 전역적으로 유일합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    /// 사용자명 (unique)
    pub username: String,
    /// 이메일 (unique)
    pub email: String,
    /// 표시 이름
    pub full_name: String,
    /// bcrypt 해시. 클라이언트에 절대 노출하지 않습니다.
    pub password_hash: String,
    pub avatar_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_image_url: Option<String>,
    /// 현재 유효한 리프레시 토큰의 SHA-256 digest (계정당 최대 1개)
    #[serde(default)]
    pub refresh_token_hash: Option<String>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl Account {
    pub fn id_string(&self) -> String {
        self.id.to_hex()
    }
}

/// 비밀번호 해시와 리프레시 토큰이 제외된 계정 뷰
///
/// 저장소에서 projection으로 조회되며, 인증 미들웨어가 요청 컨텍스트에 첨부하는 값입니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountProfile {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub username: String,
    pub email: String,
    pub full_name: String,
    pub avatar_url: String,
    #[serde(default)]
    pub cover_image_url: Option<String>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl From<Account> for AccountProfile {
    fn from(account: Account) -> Self {
        let Account {
            id,
            username,
            email,
            full_name,
            avatar_url,
            cover_image_url,
            created_at,
            updated_at,
            ..
        } = account;

        Self {
            id,
            username,
            email,
            full_name,
            avatar_url,
            cover_image_url,
            created_at,
            updated_at,
        }
    }
}

/// 계정 생성 입력
///
/// `password`는 평문이며, 해싱은 저장소의 생성 경로에서 수행됩니다.
#[derive(Debug, Clone)]
pub struct NewAccount {
    pub username: String,
    pub email: String,
    pub full_name: String,
    pub password: String,
    pub avatar_url: String,
    pub cover_image_url: Option<String>,
}

impl NewAccount {
    /// 해시된 비밀번호로 저장 가능한 엔티티를 만듭니다.
    pub fn into_account(self, password_hash: String) -> Account {
        let now = DateTime::now();

        Account {
            id: ObjectId::new(),
            username: self.username,
            email: self.email,
            full_name: self.full_name,
            password_hash,
            avatar_url: self.avatar_url,
            cover_image_url: self.cover_image_url,
            refresh_token_hash: None,
            created_at: now,
            updated_at: now,
        }
    }
}

/// 프로필 부분 수정 입력. `None` 필드는 변경하지 않습니다.
#[derive(Debug, Clone, Default)]
pub struct ProfileUpdate {
    pub full_name: Option<String>,
    pub email: Option<String>,
}

impl ProfileUpdate {
    pub fn is_empty(&self) -> bool {
        self.full_name.is_none() && self.email.is_none()
    }
}
