//! 테스트용 인메모리 계정 저장소
//!
//! MongoDB 구현과 같은 유일성, 해싱, compare-and-swap 규칙을 따릅니다.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use mongodb::bson::{oid::ObjectId, DateTime};

use super::{AccountStore, DUPLICATE_ACCOUNT_MESSAGE};
use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::accounts::{Account, AccountProfile, NewAccount, ProfileUpdate};
use crate::utils::password::PasswordHasher;

pub struct InMemoryAccountStore {
    accounts: Mutex<HashMap<ObjectId, Account>>,
    hasher: PasswordHasher,
}

impl InMemoryAccountStore {
    pub fn new() -> Self {
        Self {
            accounts: Mutex::new(HashMap::new()),
            hasher: PasswordHasher::with_cost(4),
        }
    }

    /// 저장된 원본 문서 (테스트 검증용)
    pub fn snapshot(&self, id: &ObjectId) -> Option<Account> {
        self.accounts.lock().unwrap().get(id).cloned()
    }

    pub fn len(&self) -> usize {
        self.accounts.lock().unwrap().len()
    }

    fn modify<F>(&self, id: &ObjectId, apply: F) -> AppResult<Option<AccountProfile>>
    where
        F: FnOnce(&mut Account),
    {
        let mut accounts = self.accounts.lock().unwrap();
        Ok(accounts.get_mut(id).map(|account| {
            apply(account);
            account.updated_at = DateTime::now();
            AccountProfile::from(account.clone())
        }))
    }
}

#[async_trait]
impl AccountStore for InMemoryAccountStore {
    async fn create(&self, account: NewAccount) -> AppResult<Account> {
        let password_hash = self.hasher.hash(&account.password).await?;
        let account = account.into_account(password_hash);

        let mut accounts = self.accounts.lock().unwrap();
        let taken = accounts
            .values()
            .any(|existing| existing.username == account.username || existing.email == account.email);
        if taken {
            return Err(AppError::ConflictError(DUPLICATE_ACCOUNT_MESSAGE.to_string()));
        }

        accounts.insert(account.id, account.clone());
        Ok(account)
    }

    async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<Account>> {
        Ok(self.snapshot(id))
    }

    async fn find_profile(&self, id: &ObjectId) -> AppResult<Option<AccountProfile>> {
        Ok(self.snapshot(id).map(AccountProfile::from))
    }

    async fn find_by_username_or_email(
        &self,
        username: Option<&str>,
        email: Option<&str>,
    ) -> AppResult<Option<Account>> {
        let accounts = self.accounts.lock().unwrap();
        Ok(accounts
            .values()
            .find(|account| {
                username.is_some_and(|u| account.username == u)
                    || email.is_some_and(|e| account.email == e)
            })
            .cloned())
    }

    async fn set_refresh_token(&self, id: &ObjectId, digest: Option<String>) -> AppResult<bool> {
        Ok(self
            .modify(id, |account| account.refresh_token_hash = digest)?
            .is_some())
    }

    async fn swap_refresh_token(
        &self,
        id: &ObjectId,
        expected: &str,
        new_digest: String,
    ) -> AppResult<bool> {
        let mut accounts = self.accounts.lock().unwrap();
        match accounts.get_mut(id) {
            Some(account) if account.refresh_token_hash.as_deref() == Some(expected) => {
                account.refresh_token_hash = Some(new_digest);
                account.updated_at = DateTime::now();
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn set_password(&self, id: &ObjectId, raw: &str) -> AppResult<bool> {
        let password_hash = self.hasher.hash(raw).await?;
        Ok(self
            .modify(id, |account| account.password_hash = password_hash)?
            .is_some())
    }

    async fn update_profile(
        &self,
        id: &ObjectId,
        update: ProfileUpdate,
    ) -> AppResult<Option<AccountProfile>> {
        if let Some(email) = update.email.as_deref() {
            let accounts = self.accounts.lock().unwrap();
            if accounts.values().any(|a| a.id != *id && a.email == email) {
                return Err(AppError::ConflictError(DUPLICATE_ACCOUNT_MESSAGE.to_string()));
            }
        }

        self.modify(id, |account| {
            if let Some(full_name) = update.full_name {
                account.full_name = full_name;
            }
            if let Some(email) = update.email {
                account.email = email;
            }
        })
    }

    async fn set_avatar(&self, id: &ObjectId, url: &str) -> AppResult<Option<AccountProfile>> {
        self.modify(id, |account| account.avatar_url = url.to_string())
    }

    async fn set_cover_image(&self, id: &ObjectId, url: &str) -> AppResult<Option<AccountProfile>> {
        self.modify(id, |account| account.cover_image_url = Some(url.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_account(username: &str, email: &str) -> NewAccount {
        NewAccount {
            username: username.to_string(),
            email: email.to_string(),
            full_name: "Alice A".to_string(),
            password: "secret1".to_string(),
            avatar_url: "https://cdn.example/a.png".to_string(),
            cover_image_url: None,
        }
    }

    #[actix_web::test]
    async fn test_create_hashes_password_and_rejects_duplicates() {
        let store = InMemoryAccountStore::new();
        let account = store.create(new_account("alice", "a@x.com")).await.unwrap();

        assert_ne!(account.password_hash, "secret1");

        let err = store.create(new_account("bob", "a@x.com")).await.unwrap_err();
        assert!(matches!(err, AppError::ConflictError(_)));
        assert_eq!(store.len(), 1);
    }

    #[actix_web::test]
    async fn test_swap_only_succeeds_for_expected_digest() {
        let store = InMemoryAccountStore::new();
        let account = store.create(new_account("alice", "a@x.com")).await.unwrap();

        store.set_refresh_token(&account.id, Some("d1".into())).await.unwrap();

        assert!(store.swap_refresh_token(&account.id, "d1", "d2".into()).await.unwrap());
        assert!(!store.swap_refresh_token(&account.id, "d1", "d3".into()).await.unwrap());
        assert_eq!(
            store.snapshot(&account.id).unwrap().refresh_token_hash.as_deref(),
            Some("d2")
        );
    }
}
