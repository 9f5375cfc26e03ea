//! AuthMiddleware 인증 로직의 핵심적인 기능
use std::rc::Rc;

use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse};
use actix_web::http::header;
use actix_web::{web, Error, HttpMessage, ResponseError};
use futures_util::future::LocalBoxFuture;

use crate::config::ACCESS_TOKEN_COOKIE;
use crate::core::errors::{AppError, AppResult};
use crate::core::state::AppState;
use crate::domain::models::auth::AuthenticatedAccount;

/// 실제 인증 로직을 수행하는 서비스
pub struct AuthMiddlewareService<S> {
    pub service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, actix_web::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();

        Box::pin(async move {
            match authenticate(&req).await {
                Ok(account) => {
                    log::debug!("인증 성공: 계정 ID {}", account.profile().id);
                    req.extensions_mut().insert(account);

                    let res = service.call(req).await?;
                    Ok(res.map_into_left_body())
                }
                Err(err) => {
                    log::warn!("인증 실패: {}", err);
                    let response = err.error_response();
                    let (req, _) = req.into_parts();
                    Ok(ServiceResponse::new(req, response).map_into_right_body())
                }
            }
        })
    }
}

async fn authenticate(req: &ServiceRequest) -> AppResult<AuthenticatedAccount> {
    let state = req
        .app_data::<web::Data<AppState>>()
        .ok_or_else(|| AppError::InternalError("AppState가 등록되지 않았습니다".to_string()))?;

    let token = extract_token(req)
        .ok_or_else(|| AppError::Unauthorized("인증 토큰이 필요합니다".to_string()))?;

    let profile = state.accounts.authenticate_access_token(&token).await?;
    Ok(AuthenticatedAccount(profile))
}

/// 쿠키를 먼저 확인하고, 없으면 `Authorization: Bearer` 헤더를 사용합니다.
fn extract_token(req: &ServiceRequest) -> Option<String> {
    if let Some(cookie) = req.cookie(ACCESS_TOKEN_COOKIE) {
        let value = cookie.value().trim();
        if !value.is_empty() {
            return Some(value.to_string());
        }
    }

    req.headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
}
