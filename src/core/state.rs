use std::sync::Arc;

use crate::config::CookieConfig;
use crate::services::accounts::AccountService;

/// 핸들러와 미들웨어가 공유하는 애플리케이션 상태
///
/// 시작 시점에 한 번 조립되어 `web::Data<AppState>`로 등록됩니다.
#[derive(Clone)]
pub struct AppState {
    pub accounts: Arc<AccountService>,
    pub cookies: CookieConfig,
}

impl AppState {
    pub fn new(accounts: Arc<AccountService>, cookies: CookieConfig) -> Self {
        Self { accounts, cookies }
    }
}
