use std::future::{ready, Ready};

use actix_web::{FromRequest, HttpMessage, HttpRequest};

use crate::core::errors::AppError;
use crate::domain::entities::accounts::AccountProfile;

/// 인증 미들웨어가 요청 확장(extensions)에 첨부한 계정
///
/// 비밀번호 해시와 리프레시 토큰은 포함하지 않습니다.
#[derive(Debug, Clone)]
pub struct AuthenticatedAccount(pub AccountProfile);

impl AuthenticatedAccount {
    pub fn profile(&self) -> &AccountProfile {
        &self.0
    }

    pub fn into_profile(self) -> AccountProfile {
        self.0
    }
}

/// ActixWeb FromRequest trait 구현
impl FromRequest for AuthenticatedAccount {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<AuthenticatedAccount>() {
            Some(account) => ready(Ok(account.clone())),
            None => ready(Err(AppError::Unauthorized(
                "인증되지 않은 요청입니다".to_string(),
            ))),
        }
    }
}
