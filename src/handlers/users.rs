//! # Account HTTP Handlers
//!
//! 계정 관리와 세션 관련 HTTP 엔드포인트를 처리하는 핸들러 함수들입니다.
//!
//! | 메서드 | 경로 | 인증 | 설명 |
//! |--------|------|------|------|
//! | `POST` | `/users/register` | - | multipart 등록 (avatar 필수, coverImage 선택) |
//! | `POST` | `/users/login` | - | 로그인, 토큰 쿠키 설정 |
//! | `POST` | `/users/refresh-token` | - | 리프레시 토큰 회전 |
//! | `POST` | `/users/logout` | ✓ | 리프레시 토큰 폐기, 쿠키 제거 |
//! | `POST` | `/users/change-password` | ✓ | 비밀번호 변경 |
//! | `GET` | `/users/current-user` | ✓ | 현재 계정 조회 |
//! | `PATCH` | `/users/update-account` | ✓ | 표시 이름/이메일 수정 |
//! | `PATCH` | `/users/avatar` | ✓ | 아바타 교체 |
//! | `PATCH` | `/users/cover-image` | ✓ | 커버 이미지 교체 |
//!
//! 모든 성공 응답은 `{statusCode, data, message, success}` 엔벨로프를 사용합니다.

use actix_multipart::form::MultipartForm;
use actix_web::{get, patch, post, web, HttpRequest, HttpResponse};

use crate::config::{ACCESS_TOKEN_COOKIE, REFRESH_TOKEN_COOKIE};
use crate::core::errors::AppResult;
use crate::core::state::AppState;
use crate::domain::dto::accounts::request::{
    AvatarForm, ChangePasswordRequest, CoverImageForm, LoginRequest, RefreshTokenRequest,
    RegisterForm, RegisterInput, UpdateAccountRequest,
};
use crate::domain::dto::accounts::response::{AccountResponse, LoginResponse};
use crate::domain::dto::common::{ApiResponse, Empty};
use crate::domain::models::auth::AuthenticatedAccount;
use crate::middlewares::AuthMiddleware;

/// 계정 등록
#[post("/register")]
pub async fn register(
    state: web::Data<AppState>,
    MultipartForm(form): MultipartForm<RegisterForm>,
) -> AppResult<HttpResponse> {
    let profile = state.accounts.register(RegisterInput::from(form)).await?;

    Ok(ApiResponse::ok(AccountResponse::from(profile), "계정이 등록되었습니다").into_http())
}

/// 로그인
///
/// 토큰은 http-only 쿠키와 응답 본문 양쪽으로 전달됩니다.
#[post("/login")]
pub async fn login(
    state: web::Data<AppState>,
    payload: web::Json<LoginRequest>,
) -> AppResult<HttpResponse> {
    let (profile, tokens) = state.accounts.login(payload.into_inner()).await?;

    Ok(HttpResponse::Ok()
        .cookie(state.cookies.access_cookie(&tokens.access_token))
        .cookie(state.cookies.refresh_cookie(&tokens.refresh_token))
        .json(ApiResponse::ok(
            LoginResponse::new(profile, tokens),
            "로그인되었습니다",
        )))
}

#[post("/logout", wrap = "AuthMiddleware::required()")]
pub async fn logout(
    state: web::Data<AppState>,
    account: AuthenticatedAccount,
) -> AppResult<HttpResponse> {
    state.accounts.logout(&account.profile().id).await?;

    Ok(HttpResponse::Ok()
        .cookie(state.cookies.removal_cookie(ACCESS_TOKEN_COOKIE))
        .cookie(state.cookies.removal_cookie(REFRESH_TOKEN_COOKIE))
        .json(ApiResponse::ok(Empty::default(), "로그아웃되었습니다")))
}

/// 액세스 토큰 갱신
///
/// 리프레시 토큰은 쿠키를 우선 사용하고, 없으면 JSON 본문의 `refreshToken`을 사용합니다.
#[post("/refresh-token")]
pub async fn refresh_token(
    state: web::Data<AppState>,
    req: HttpRequest,
    payload: Option<web::Json<RefreshTokenRequest>>,
) -> AppResult<HttpResponse> {
    let presented = req
        .cookie(REFRESH_TOKEN_COOKIE)
        .map(|cookie| cookie.value().to_string())
        .filter(|value| !value.trim().is_empty())
        .or_else(|| payload.and_then(|body| body.into_inner().refresh_token));

    let tokens = state.accounts.refresh(presented).await?;

    Ok(HttpResponse::Ok()
        .cookie(state.cookies.access_cookie(&tokens.access_token))
        .cookie(state.cookies.refresh_cookie(&tokens.refresh_token))
        .json(ApiResponse::ok(tokens, "토큰이 갱신되었습니다")))
}

#[post("/change-password", wrap = "AuthMiddleware::required()")]
pub async fn change_password(
    state: web::Data<AppState>,
    account: AuthenticatedAccount,
    payload: web::Json<ChangePasswordRequest>,
) -> AppResult<HttpResponse> {
    state
        .accounts
        .change_password(&account.profile().id, payload.into_inner())
        .await?;

    Ok(ApiResponse::ok(Empty::default(), "비밀번호가 변경되었습니다").into_http())
}

#[get("/current-user", wrap = "AuthMiddleware::required()")]
pub async fn current_user(account: AuthenticatedAccount) -> AppResult<HttpResponse> {
    Ok(ApiResponse::ok(
        AccountResponse::from(account.into_profile()),
        "현재 계정 정보입니다",
    )
    .into_http())
}

#[patch("/update-account", wrap = "AuthMiddleware::required()")]
pub async fn update_account(
    state: web::Data<AppState>,
    account: AuthenticatedAccount,
    payload: web::Json<UpdateAccountRequest>,
) -> AppResult<HttpResponse> {
    let profile = state
        .accounts
        .update_profile(&account.profile().id, payload.into_inner())
        .await?;

    Ok(ApiResponse::ok(AccountResponse::from(profile), "계정 정보가 수정되었습니다").into_http())
}

#[patch("/avatar", wrap = "AuthMiddleware::required()")]
pub async fn update_avatar(
    state: web::Data<AppState>,
    account: AuthenticatedAccount,
    MultipartForm(form): MultipartForm<AvatarForm>,
) -> AppResult<HttpResponse> {
    let profile = state
        .accounts
        .update_avatar(&account.profile().id, form.into_file())
        .await?;

    Ok(ApiResponse::ok(AccountResponse::from(profile), "아바타가 변경되었습니다").into_http())
}

#[patch("/cover-image", wrap = "AuthMiddleware::required()")]
pub async fn update_cover_image(
    state: web::Data<AppState>,
    account: AuthenticatedAccount,
    MultipartForm(form): MultipartForm<CoverImageForm>,
) -> AppResult<HttpResponse> {
    let profile = state
        .accounts
        .update_cover_image(&account.profile().id, form.into_file())
        .await?;

    Ok(ApiResponse::ok(AccountResponse::from(profile), "커버 이미지가 변경되었습니다").into_http())
}
