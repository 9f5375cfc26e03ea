//! # 계정 저장소
//!
//! 계정 문서의 데이터 액세스 계층입니다. 서비스 계층은 [`AccountStore`] trait에만
//! 의존하며, 운영 환경에서는 [`MongoAccountStore`]가 주입됩니다.
//!
//! ## 저장소 규칙
//!
//! - **비밀번호 해싱**: `create`, `set_password`는 평문을 받아 저장 직전에 해싱합니다.
//! - **유일성**: `username`, `email` 중복은 `ConflictError`로 변환됩니다.
//! - **리프레시 토큰**: 토큰 원문이 아니라 SHA-256 digest만 저장합니다.
//! - **정제된 조회**: `find_profile`과 부분 수정 메서드는 비밀번호 해시와 리프레시 토큰을
//!   projection으로 제외한 [`AccountProfile`]을 반환합니다.

pub mod account_repo;

#[cfg(test)]
pub mod memory;

pub use account_repo::MongoAccountStore;

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use crate::core::errors::AppResult;
use crate::domain::entities::accounts::{Account, AccountProfile, NewAccount, ProfileUpdate};

/// 계정 영속성 포트
#[async_trait]
pub trait AccountStore: Send + Sync {
    /// 비밀번호를 해싱하여 새 계정을 저장합니다.
    async fn create(&self, account: NewAccount) -> AppResult<Account>;

    async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<Account>>;

    /// 비밀번호 해시와 리프레시 토큰을 제외하고 조회합니다.
    async fn find_profile(&self, id: &ObjectId) -> AppResult<Option<AccountProfile>>;

    /// 사용자명 또는 이메일 중 하나라도 일치하는 계정을 찾습니다.
    ///
    /// 두 값이 모두 `None`이면 조회하지 않고 `None`을 반환합니다.
    async fn find_by_username_or_email(
        &self,
        username: Option<&str>,
        email: Option<&str>,
    ) -> AppResult<Option<Account>>;

    /// 저장된 리프레시 토큰 digest를 덮어쓰거나(`Some`) 제거합니다(`None`).
    ///
    /// 계정이 존재하지 않으면 `false`를 반환합니다.
    async fn set_refresh_token(&self, id: &ObjectId, digest: Option<String>) -> AppResult<bool>;

    /// 저장된 digest가 `expected`와 같을 때만 `new_digest`로 교체합니다.
    ///
    /// 동시에 같은 토큰으로 갱신을 시도하면 하나만 `true`를 받습니다.
    async fn swap_refresh_token(
        &self,
        id: &ObjectId,
        expected: &str,
        new_digest: String,
    ) -> AppResult<bool>;

    /// 새 비밀번호를 해싱하여 교체합니다. 나머지 필드는 검증하지 않습니다.
    async fn set_password(&self, id: &ObjectId, raw: &str) -> AppResult<bool>;

    async fn update_profile(
        &self,
        id: &ObjectId,
        update: ProfileUpdate,
    ) -> AppResult<Option<AccountProfile>>;

    async fn set_avatar(&self, id: &ObjectId, url: &str) -> AppResult<Option<AccountProfile>>;

    async fn set_cover_image(&self, id: &ObjectId, url: &str) -> AppResult<Option<AccountProfile>>;
}

pub(crate) const DUPLICATE_ACCOUNT_MESSAGE: &str = "이미 사용 중인 사용자명 또는 이메일입니다";
