//! # MongoDB 계정 리포지토리 구현
//!
//! `users` 컬렉션에 대한 [`AccountStore`] 구현입니다.
//!
//! ## 인덱스
//!
//! - `email` (unique), `username` (unique), `created_at` (desc)
//!
//! 유일성은 사전 조회가 아니라 유니크 인덱스로 보장되며, 중복 키 에러(11000)는
//! `ConflictError`로 변환됩니다.

use async_trait::async_trait;
use mongodb::bson::{doc, oid::ObjectId, DateTime, Document};
use mongodb::error::{ErrorKind, WriteFailure};
use mongodb::options::{FindOneAndUpdateOptions, IndexOptions, ReturnDocument};
use mongodb::{Collection, IndexModel};

use super::{AccountStore, DUPLICATE_ACCOUNT_MESSAGE};
use crate::core::errors::{AppError, AppResult};
use crate::db::Database;
use crate::domain::entities::accounts::{Account, AccountProfile, NewAccount, ProfileUpdate};
use crate::utils::password::PasswordHasher;

const COLLECTION_NAME: &str = "users";
const DUPLICATE_KEY_CODE: i32 = 11000;

/// 계정 데이터 액세스 리포지토리
#[derive(Clone)]
pub struct MongoAccountStore {
    accounts: Collection<Account>,
    profiles: Collection<AccountProfile>,
    hasher: PasswordHasher,
}

impl MongoAccountStore {
    pub fn new(database: &Database, hasher: PasswordHasher) -> Self {
        let accounts = database.get_database().collection::<Account>(COLLECTION_NAME);
        let profiles = accounts.clone_with_type::<AccountProfile>();

        Self {
            accounts,
            profiles,
            hasher,
        }
    }

    /// 유니크 인덱스와 생성일 인덱스를 생성합니다. 이미 존재하면 아무것도 하지 않습니다.
    pub async fn create_indexes(&self) -> AppResult<()> {
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("email_unique".to_string())
                    .build(),
            )
            .build();

        let username_index = IndexModel::builder()
            .keys(doc! { "username": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("username_unique".to_string())
                    .build(),
            )
            .build();

        let created_at_index = IndexModel::builder()
            .keys(doc! { "created_at": -1 })
            .options(
                IndexOptions::builder()
                    .name("created_at_desc".to_string())
                    .build(),
            )
            .build();

        self.accounts
            .create_indexes([email_index, username_index, created_at_index])
            .await?;

        log::info!("📇 {} 컬렉션 인덱스 확인 완료", COLLECTION_NAME);
        Ok(())
    }

    /// `$set` 후 정제된 프로필을 반환합니다.
    async fn set_fields(&self, id: &ObjectId, mut fields: Document) -> AppResult<Option<AccountProfile>> {
        fields.insert("updated_at", DateTime::now());

        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .projection(profile_projection())
            .build();

        self.profiles
            .find_one_and_update(doc! { "_id": *id }, doc! { "$set": fields })
            .with_options(options)
            .await
            .map_err(map_write_error)
    }
}

#[async_trait]
impl AccountStore for MongoAccountStore {
    async fn create(&self, account: NewAccount) -> AppResult<Account> {
        let password_hash = self.hasher.hash(&account.password).await?;
        let account = account.into_account(password_hash);

        self.accounts
            .insert_one(&account)
            .await
            .map_err(map_write_error)?;

        log::debug!("계정 생성: {} ({})", account.username, account.id_string());
        Ok(account)
    }

    async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<Account>> {
        Ok(self.accounts.find_one(doc! { "_id": *id }).await?)
    }

    async fn find_profile(&self, id: &ObjectId) -> AppResult<Option<AccountProfile>> {
        Ok(self
            .profiles
            .find_one(doc! { "_id": *id })
            .projection(profile_projection())
            .await?)
    }

    async fn find_by_username_or_email(
        &self,
        username: Option<&str>,
        email: Option<&str>,
    ) -> AppResult<Option<Account>> {
        let mut clauses = Vec::new();
        if let Some(username) = username {
            clauses.push(doc! { "username": username });
        }
        if let Some(email) = email {
            clauses.push(doc! { "email": email });
        }

        if clauses.is_empty() {
            return Ok(None);
        }

        Ok(self.accounts.find_one(doc! { "$or": clauses }).await?)
    }

    async fn set_refresh_token(&self, id: &ObjectId, digest: Option<String>) -> AppResult<bool> {
        let now = DateTime::now();
        let update = match digest {
            Some(digest) => doc! {
                "$set": { "refresh_token_hash": digest, "updated_at": now }
            },
            None => doc! {
                "$unset": { "refresh_token_hash": "" },
                "$set": { "updated_at": now }
            },
        };

        let result = self.accounts.update_one(doc! { "_id": *id }, update).await?;
        Ok(result.matched_count == 1)
    }

    async fn swap_refresh_token(
        &self,
        id: &ObjectId,
        expected: &str,
        new_digest: String,
    ) -> AppResult<bool> {
        let result = self
            .accounts
            .update_one(
                doc! { "_id": *id, "refresh_token_hash": expected },
                doc! { "$set": { "refresh_token_hash": new_digest, "updated_at": DateTime::now() } },
            )
            .await?;

        Ok(result.matched_count == 1)
    }

    async fn set_password(&self, id: &ObjectId, raw: &str) -> AppResult<bool> {
        let password_hash = self.hasher.hash(raw).await?;

        let result = self
            .accounts
            .update_one(
                doc! { "_id": *id },
                doc! { "$set": { "password_hash": password_hash, "updated_at": DateTime::now() } },
            )
            .await?;

        Ok(result.matched_count == 1)
    }

    async fn update_profile(
        &self,
        id: &ObjectId,
        update: ProfileUpdate,
    ) -> AppResult<Option<AccountProfile>> {
        let mut fields = Document::new();
        if let Some(full_name) = update.full_name {
            fields.insert("full_name", full_name);
        }
        if let Some(email) = update.email {
            fields.insert("email", email);
        }

        self.set_fields(id, fields).await
    }

    async fn set_avatar(&self, id: &ObjectId, url: &str) -> AppResult<Option<AccountProfile>> {
        self.set_fields(id, doc! { "avatar_url": url }).await
    }

    async fn set_cover_image(&self, id: &ObjectId, url: &str) -> AppResult<Option<AccountProfile>> {
        self.set_fields(id, doc! { "cover_image_url": url }).await
    }
}

fn profile_projection() -> Document {
    doc! { "password_hash": 0, "refresh_token_hash": 0 }
}

fn is_duplicate_key(err: &mongodb::error::Error) -> bool {
    match err.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(write_error)) => {
            write_error.code == DUPLICATE_KEY_CODE
        }
        ErrorKind::Command(command_error) => command_error.code == DUPLICATE_KEY_CODE,
        _ => false,
    }
}

fn map_write_error(err: mongodb::error::Error) -> AppError {
    if is_duplicate_key(&err) {
        AppError::ConflictError(DUPLICATE_ACCOUNT_MESSAGE.to_string())
    } else {
        AppError::from(err)
    }
}
