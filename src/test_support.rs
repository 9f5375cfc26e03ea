//! 테스트 공용 픽스처

use std::io::Write;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use actix_web::cookie::SameSite;
use async_trait::async_trait;
use chrono::Duration;

use crate::config::{CookieConfig, JwtConfig, MediaConfig};
use crate::core::errors::{AppError, AppResult};
use crate::core::state::AppState;
use crate::domain::entities::accounts::{Account, NewAccount};
use crate::repositories::accounts::memory::InMemoryAccountStore;
use crate::services::accounts::AccountService;
use crate::services::auth::{FixedClock, JwtCodec, TokenService};
use crate::services::media::{LocalFile, MediaUploader, UploadedMedia};
use crate::utils::password::PasswordHasher;

/// 테스트 서비스의 업로드 파일 크기 제한
pub const UPLOAD_LIMIT: usize = 1024;

pub fn jwt_config() -> JwtConfig {
    JwtConfig {
        access_secret: "access-secret".to_string(),
        refresh_secret: "refresh-secret".to_string(),
        access_ttl: Duration::minutes(15),
        refresh_ttl: Duration::days(10),
        leeway: Duration::zero(),
    }
}

pub fn cookie_config() -> CookieConfig {
    let jwt = jwt_config();
    CookieConfig {
        http_only: true,
        secure: true,
        same_site: SameSite::Lax,
        path: "/".to_string(),
        access_max_age: jwt.access_ttl,
        refresh_max_age: jwt.refresh_ttl,
    }
}

pub fn media_config(base_url: &str) -> MediaConfig {
    MediaConfig {
        cloud_name: "demo".to_string(),
        api_key: "cloud-key".to_string(),
        api_secret: "cloud-secret".to_string(),
        base_url: base_url.to_string(),
        folder: Some("avatars".to_string()),
        temp_dir: std::env::temp_dir(),
        max_file_size: 10 * 1024 * 1024,
    }
}

pub fn new_account(username: &str, email: &str) -> NewAccount {
    NewAccount {
        username: username.to_string(),
        email: email.to_string(),
        full_name: "Alice A".to_string(),
        password: "secret1".to_string(),
        avatar_url: "https://cdn.example/avatar.png".to_string(),
        cover_image_url: None,
    }
}

pub fn sample_account(username: &str, email: &str) -> Account {
    new_account(username, email).into_account("$2b$04$placeholder".to_string())
}

/// 내용이 채워진 업로드 임시 파일
pub fn temp_upload(bytes: &[u8], name: &str) -> LocalFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(bytes).unwrap();
    file.flush().unwrap();
    LocalFile::new(
        file,
        Some(name.to_string()),
        Some("image/png".to_string()),
        bytes.len(),
    )
}

/// 업로드 호출을 기록하는 가짜 업로더
///
/// 실제 업로더와 같이 결과와 무관하게 파일을 삭제합니다.
#[derive(Default)]
pub struct FakeUploader {
    fail_on: Option<String>,
    calls: AtomicUsize,
    uploaded: std::sync::Mutex<Vec<PathBuf>>,
}

impl FakeUploader {
    pub fn new() -> Self {
        Self::default()
    }

    /// 파일 이름이 `name`인 업로드만 실패시킵니다.
    pub fn failing_on(name: &str) -> Self {
        Self {
            fail_on: Some(name.to_string()),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// 업로드된 임시 파일 경로 목록
    pub fn uploaded_paths(&self) -> Vec<PathBuf> {
        self.uploaded.lock().unwrap().clone()
    }
}

#[async_trait]
impl MediaUploader for FakeUploader {
    async fn upload(&self, file: LocalFile) -> AppResult<UploadedMedia> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.uploaded.lock().unwrap().push(file.path().to_path_buf());

        let name = file.file_name().to_string();
        file.close();

        if self.fail_on.as_deref() == Some(name.as_str()) {
            return Err(AppError::UploadError("업로드 결과 URL이 없습니다".to_string()));
        }

        Ok(UploadedMedia {
            url: format!("https://cdn.example/{}", name),
        })
    }
}

/// 인메모리 저장소와 가짜 업로더로 조립한 서비스 묶음
pub struct TestContext {
    pub state: AppState,
    pub store: Arc<InMemoryAccountStore>,
    pub uploader: Arc<FakeUploader>,
    pub clock: Arc<FixedClock>,
}

pub fn test_context() -> TestContext {
    test_context_with(FakeUploader::new())
}

pub fn test_context_with(uploader: FakeUploader) -> TestContext {
    let store = Arc::new(InMemoryAccountStore::new());
    let uploader = Arc::new(uploader);
    let clock = Arc::new(FixedClock::new());

    let codec = Arc::new(JwtCodec::new(jwt_config(), clock.clone()));
    let tokens = Arc::new(TokenService::new(codec, store.clone()));
    let accounts = Arc::new(AccountService::new(
        store.clone(),
        tokens,
        uploader.clone(),
        PasswordHasher::with_cost(4),
        UPLOAD_LIMIT,
    ));

    TestContext {
        state: AppState::new(accounts, cookie_config()),
        store,
        uploader,
        clock,
    }
}
