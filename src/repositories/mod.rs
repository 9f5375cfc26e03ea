//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 서비스 계층은 저장소 trait에만 의존하며, 구현체는 `main`에서 생성되어
//! `Arc<dyn AccountStore>`로 주입됩니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use account_service::repositories::accounts::{AccountStore, MongoAccountStore};
//!
//! let store = MongoAccountStore::new(&database, hasher);
//! store.create_indexes().await?;
//! let store: Arc<dyn AccountStore> = Arc::new(store);
//! ```

pub mod accounts;
