//! Database Connection Management Module
//!
//! MongoDB 데이터베이스 연결 관리를 담당하는 모듈입니다.
//!
//! # 기본 사용법
//!
//! ```rust,ignore
//! use account_service::config::AppConfig;
//! use account_service::db::Database;
//!
//! let config = AppConfig::from_env()?;
//! let database = Database::connect(&config.database).await?;
//! let accounts = MongoAccountStore::new(&database, hasher);
//! ```

use log::info;
use mongodb::{Client, options::ClientOptions};

use crate::config::DatabaseConfig;

/// MongoDB 데이터베이스 연결 래퍼
///
/// MongoDB 클라이언트와 데이터베이스 이름을 함께 보관하며,
/// 리포지토리 계층에서 컬렉션을 얻는 기본 인터페이스를 제공합니다.
#[derive(Clone)]
pub struct Database {
    client: Client,
    database_name: String,
}

impl Database {
    /// 새 MongoDB 데이터베이스 연결을 생성합니다.
    ///
    /// 클라이언트를 초기화한 뒤 `ping` 명령으로 연결 상태를 검증합니다.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, mongodb::error::Error> {
        let mut client_options = ClientOptions::parse(&config.uri).await?;

        // 애플리케이션 이름 설정 (모니터링 및 로깅에 유용)
        client_options.app_name = Some(config.app_name.clone());

        let client = Client::with_options(client_options)?;

        client
            .database(&config.database_name)
            .run_command(mongodb::bson::doc! { "ping": 1 })
            .await?;

        info!("✅ MongoDB 연결 성공: {}", config.database_name);

        Ok(Self {
            client,
            database_name: config.database_name.clone(),
        })
    }

    /// 실제 MongoDB 작업을 위한 `mongodb::Database` 인스턴스를 반환합니다.
    pub fn get_database(&self) -> mongodb::Database {
        self.client.database(&self.database_name)
    }

    pub fn database_name(&self) -> &str {
        &self.database_name
    }

    /// 진행 중인 작업이 끝나기를 기다린 뒤 연결 풀을 닫습니다.
    pub async fn shutdown(self) {
        self.client.shutdown().await;
        info!("🔌 MongoDB 연결 종료: {}", self.database_name);
    }
}
