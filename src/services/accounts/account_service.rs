//! # 계정 관리 서비스 구현
//!
//! 계정의 전체 생명주기를 관리하는 비즈니스 로직입니다.
//! 저장소, 토큰 서비스, 미디어 업로더는 모두 생성자로 주입됩니다.
//!
//! ## 처리 흐름
//!
//! ```text
//! register ──▶ 입력 검증 ──▶ 중복 확인 ──▶ 아바타/커버 업로드 ──▶ 생성 ──▶ 정제된 재조회
//! login    ──▶ 계정 조회 ──▶ 비밀번호 검증 ──▶ 토큰 쌍 발급
//! logout   ──▶ 리프레시 토큰 폐기
//! refresh  ──▶ 리프레시 토큰 회전
//! ```
//!
//! ## 에러 처리
//!
//! - **ValidationError**: 필수 입력 누락, 아바타 누락, 파일 크기 초과, 수정할 필드 없음
//! - **ConflictError**: 사용자명/이메일 중복
//! - **NotFound**: 로그인 대상 계정 없음
//! - **Unauthorized**: 비밀번호 불일치, 액세스 토큰 검증 실패
//! - **UploadError**: 필수 미디어 업로드 실패
//! - **InternalError**: 생성 직후 계정 재조회 실패

use std::sync::Arc;

use mongodb::bson::oid::ObjectId;
use validator::Validate;

use crate::core::errors::{AppError, AppResult};
use crate::domain::dto::accounts::request::{
    ChangePasswordRequest, LoginRequest, RegisterInput, UpdateAccountRequest,
};
use crate::domain::entities::accounts::{AccountProfile, NewAccount, ProfileUpdate};
use crate::domain::models::token::TokenPair;
use crate::repositories::accounts::AccountStore;
use crate::services::auth::TokenService;
use crate::services::media::{LocalFile, MediaUploader};
use crate::utils::password::PasswordHasher;
use crate::utils::string_utils::{clean_optional_string, normalize_identifier, validate_required_string};

/// 계정 관리 비즈니스 로직 서비스
pub struct AccountService {
    store: Arc<dyn AccountStore>,
    tokens: Arc<TokenService>,
    uploader: Arc<dyn MediaUploader>,
    hasher: PasswordHasher,
    /// 업로드 파일 하나의 최대 크기 (바이트)
    max_file_size: usize,
}

impl AccountService {
    pub fn new(
        store: Arc<dyn AccountStore>,
        tokens: Arc<TokenService>,
        uploader: Arc<dyn MediaUploader>,
        hasher: PasswordHasher,
        max_file_size: usize,
    ) -> Self {
        Self {
            store,
            tokens,
            uploader,
            hasher,
            max_file_size,
        }
    }

    fn check_file_size(&self, file: &LocalFile, field: &str) -> AppResult<()> {
        if file.size() > self.max_file_size {
            log::warn!("{} 파일 크기 초과: {} bytes", field, file.size());
            return Err(AppError::ValidationError(format!(
                "{} 파일은 {} bytes 이하여야 합니다",
                field, self.max_file_size
            )));
        }
        Ok(())
    }

    /// 새 계정 등록
    ///
    /// 업로드되지 않은 임시 파일은 어느 경로로 반환되든 drop 시점에 삭제됩니다.
    /// 커버 이미지 업로드 실패는 등록을 막지 않습니다.
    pub async fn register(&self, input: RegisterInput) -> AppResult<AccountProfile> {
        let RegisterInput {
            username,
            full_name,
            email,
            password,
            avatar,
            cover_image,
        } = input;

        let username = normalize_identifier(&validate_required_string(&username, "username")?);
        let full_name = validate_required_string(&full_name, "fullname")?;
        let email = normalize_identifier(&validate_required_string(&email, "email")?);
        let password = validate_required_string(&password, "password")?;

        if self
            .store
            .find_by_username_or_email(Some(&username), Some(&email))
            .await?
            .is_some()
        {
            log::warn!("중복 계정 등록 시도: {}", username);
            return Err(AppError::ConflictError(
                "이미 사용 중인 사용자명 또는 이메일입니다".to_string(),
            ));
        }

        let avatar = avatar
            .ok_or_else(|| AppError::ValidationError("아바타 파일은 필수입니다".to_string()))?;
        self.check_file_size(&avatar, "avatar")?;
        if let Some(cover) = &cover_image {
            self.check_file_size(cover, "coverImage")?;
        }

        let avatar_url = self.uploader.upload(avatar).await?.url;

        let cover_image_url = match cover_image {
            Some(file) => match self.uploader.upload(file).await {
                Ok(media) => Some(media.url),
                Err(e) => {
                    log::warn!("커버 이미지 업로드 실패, 커버 없이 등록합니다: {}", e);
                    None
                }
            },
            None => None,
        };

        let created = self
            .store
            .create(NewAccount {
                username,
                email,
                full_name,
                password,
                avatar_url,
                cover_image_url,
            })
            .await?;

        let profile = self.store.find_profile(&created.id).await?.ok_or_else(|| {
            AppError::InternalError(format!("생성된 계정을 다시 조회할 수 없습니다: {}", created.id))
        })?;

        log::info!("✅ 계정 등록 완료: {} ({})", profile.username, profile.id);
        Ok(profile)
    }

    /// 사용자명 또는 이메일과 비밀번호로 로그인하고 토큰 쌍을 발급합니다.
    pub async fn login(&self, request: LoginRequest) -> AppResult<(AccountProfile, TokenPair)> {
        request.validate()?;

        let username = clean_optional_string(request.username).map(|u| normalize_identifier(&u));
        let email = clean_optional_string(request.email).map(|e| normalize_identifier(&e));

        if username.is_none() && email.is_none() {
            return Err(AppError::ValidationError(
                "사용자명 또는 이메일이 필요합니다".to_string(),
            ));
        }

        let account = self
            .store
            .find_by_username_or_email(username.as_deref(), email.as_deref())
            .await?
            .ok_or_else(|| AppError::NotFound("존재하지 않는 계정입니다".to_string()))?;

        if !self.hasher.verify(&request.password, &account.password_hash).await? {
            log::warn!("로그인 실패 (비밀번호 불일치): {}", account.username);
            return Err(AppError::Unauthorized(
                "사용자 인증 정보가 올바르지 않습니다".to_string(),
            ));
        }

        let tokens = self.tokens.issue_token_pair(&account.id).await?;

        log::info!("로그인 성공: {}", account.username);
        Ok((AccountProfile::from(account), tokens))
    }

    pub async fn logout(&self, account_id: &ObjectId) -> AppResult<()> {
        self.tokens.revoke(account_id).await?;
        log::info!("로그아웃: {}", account_id);
        Ok(())
    }

    /// 쿠키 또는 본문에서 받은 리프레시 토큰으로 새 토큰 쌍을 발급합니다.
    pub async fn refresh(&self, presented: Option<String>) -> AppResult<TokenPair> {
        let token = clean_optional_string(presented)
            .ok_or_else(|| AppError::Unauthorized("리프레시 토큰이 필요합니다".to_string()))?;

        self.tokens.rotate(&token).await
    }

    pub async fn change_password(
        &self,
        account_id: &ObjectId,
        request: ChangePasswordRequest,
    ) -> AppResult<()> {
        request.validate()?;

        let account = self
            .store
            .find_by_id(account_id)
            .await?
            .ok_or_else(|| AppError::NotFound("계정을 찾을 수 없습니다".to_string()))?;

        if !self.hasher.verify(&request.old_password, &account.password_hash).await? {
            log::warn!("비밀번호 변경 실패 (현재 비밀번호 불일치): {}", account.username);
            return Err(AppError::Unauthorized(
                "현재 비밀번호가 올바르지 않습니다".to_string(),
            ));
        }

        if !self.store.set_password(account_id, &request.new_password).await? {
            return Err(AppError::NotFound("계정을 찾을 수 없습니다".to_string()));
        }

        log::info!("비밀번호 변경: {}", account.username);
        Ok(())
    }

    /// 전달된 필드만 수정합니다.
    pub async fn update_profile(
        &self,
        account_id: &ObjectId,
        request: UpdateAccountRequest,
    ) -> AppResult<AccountProfile> {
        request.validate()?;

        let mut update = ProfileUpdate::from(request);
        update.email = update.email.map(|e| normalize_identifier(&e));

        if update.is_empty() {
            return Err(AppError::ValidationError(
                "표시 이름 또는 이메일 중 하나는 필요합니다".to_string(),
            ));
        }

        self.store
            .update_profile(account_id, update)
            .await?
            .ok_or_else(|| AppError::NotFound("계정을 찾을 수 없습니다".to_string()))
    }

    pub async fn update_avatar(
        &self,
        account_id: &ObjectId,
        file: Option<LocalFile>,
    ) -> AppResult<AccountProfile> {
        let file =
            file.ok_or_else(|| AppError::ValidationError("아바타 파일이 없습니다".to_string()))?;
        self.check_file_size(&file, "avatar")?;
        let media = self.uploader.upload(file).await?;

        self.store
            .set_avatar(account_id, &media.url)
            .await?
            .ok_or_else(|| AppError::NotFound("계정을 찾을 수 없습니다".to_string()))
    }

    pub async fn update_cover_image(
        &self,
        account_id: &ObjectId,
        file: Option<LocalFile>,
    ) -> AppResult<AccountProfile> {
        let file = file
            .ok_or_else(|| AppError::ValidationError("커버 이미지 파일이 없습니다".to_string()))?;
        self.check_file_size(&file, "coverImage")?;
        let media = self.uploader.upload(file).await?;

        self.store
            .set_cover_image(account_id, &media.url)
            .await?
            .ok_or_else(|| AppError::NotFound("계정을 찾을 수 없습니다".to_string()))
    }

    /// 액세스 토큰을 검증하고 정제된 계정을 조회합니다.
    ///
    /// 토큰 관련 실패는 모두 `Unauthorized`로 바뀌며, 저장소 장애는 그대로 전파됩니다.
    pub async fn authenticate_access_token(&self, token: &str) -> AppResult<AccountProfile> {
        let claims = self
            .tokens
            .verify_access_token(token)
            .map_err(|e| AppError::Unauthorized(e.client_message()))?;

        let account_id = ObjectId::parse_str(&claims.sub)
            .map_err(|_| AppError::Unauthorized("유효하지 않은 액세스 토큰입니다".to_string()))?;

        self.store
            .find_profile(&account_id)
            .await?
            .ok_or_else(|| AppError::Unauthorized("유효하지 않은 액세스 토큰입니다".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{
        test_context, test_context_with, temp_upload, FakeUploader, TestContext, UPLOAD_LIMIT,
    };

    fn register_input(username: &str, email: &str) -> RegisterInput {
        RegisterInput {
            username: username.to_string(),
            full_name: "Alice A".to_string(),
            email: email.to_string(),
            password: "secret1".to_string(),
            avatar: Some(temp_upload(b"avatar", "avatar.png")),
            cover_image: None,
        }
    }

    fn login(username: &str, password: &str) -> LoginRequest {
        LoginRequest {
            username: Some(username.to_string()),
            email: None,
            password: password.to_string(),
        }
    }

    async fn registered(ctx: &TestContext) -> AccountProfile {
        ctx.state
            .accounts
            .register(register_input("alice", "a@x.com"))
            .await
            .unwrap()
    }

    #[actix_web::test]
    async fn test_register_normalizes_and_uploads_avatar() {
        let ctx = test_context();
        let profile = ctx
            .state
            .accounts
            .register(register_input("  Alice ", " A@X.com"))
            .await
            .unwrap();

        assert_eq!(profile.username, "alice");
        assert_eq!(profile.email, "a@x.com");
        assert_eq!(profile.avatar_url, "https://cdn.example/avatar.png");
        assert!(profile.cover_image_url.is_none());
        assert_eq!(ctx.uploader.calls(), 1);

        let stored = ctx.store.snapshot(&profile.id).unwrap();
        assert_ne!(stored.password_hash, "secret1");
    }

    #[actix_web::test]
    async fn test_register_duplicate_is_conflict_and_cleans_files() {
        let ctx = test_context();
        registered(&ctx).await;

        let input = register_input("bob", "a@x.com");
        let avatar_path = input.avatar.as_ref().unwrap().path().to_path_buf();

        let err = ctx.state.accounts.register(input).await.unwrap_err();

        assert!(matches!(err, AppError::ConflictError(_)));
        assert_eq!(ctx.store.len(), 1);
        assert_eq!(ctx.uploader.calls(), 1);
        assert!(!avatar_path.exists());
    }

    #[actix_web::test]
    async fn test_register_requires_avatar() {
        let ctx = test_context();
        let mut input = register_input("alice", "a@x.com");
        input.avatar = None;

        let err = ctx.state.accounts.register(input).await.unwrap_err();

        assert!(matches!(err, AppError::ValidationError(_)));
        assert_eq!(ctx.store.len(), 0);
    }

    #[actix_web::test]
    async fn test_register_rejects_blank_fields() {
        let ctx = test_context();
        let mut input = register_input("alice", "a@x.com");
        input.full_name = "   ".to_string();

        let err = ctx.state.accounts.register(input).await.unwrap_err();
        assert!(matches!(err, AppError::ValidationError(msg) if msg.contains("fullname")));
        assert_eq!(ctx.uploader.calls(), 0);
    }

    #[actix_web::test]
    async fn test_register_rejects_oversized_files_before_upload() {
        let ctx = test_context();
        let oversized = vec![0u8; UPLOAD_LIMIT + 1];

        let mut input = register_input("alice", "a@x.com");
        input.avatar = Some(temp_upload(&oversized, "big.png"));
        let err = ctx.state.accounts.register(input).await.unwrap_err();
        assert!(matches!(err, AppError::ValidationError(msg) if msg.contains("avatar")));

        let mut input = register_input("alice", "a@x.com");
        input.cover_image = Some(temp_upload(&oversized, "big-cover.png"));
        let cover_path = input.cover_image.as_ref().unwrap().path().to_path_buf();
        let err = ctx.state.accounts.register(input).await.unwrap_err();
        assert!(matches!(err, AppError::ValidationError(msg) if msg.contains("coverImage")));

        assert_eq!(ctx.uploader.calls(), 0);
        assert_eq!(ctx.store.len(), 0);
        assert!(!cover_path.exists());
    }

    #[actix_web::test]
    async fn test_update_avatar_rejects_oversized_file() {
        let ctx = test_context();
        let profile = registered(&ctx).await;

        let exact = temp_upload(&vec![1u8; UPLOAD_LIMIT], "exact.png");
        assert!(ctx.state.accounts.update_avatar(&profile.id, Some(exact)).await.is_ok());

        let oversized = temp_upload(&vec![1u8; UPLOAD_LIMIT + 1], "big.png");
        let err = ctx
            .state
            .accounts
            .update_cover_image(&profile.id, Some(oversized))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::ValidationError(_)));
        assert_eq!(ctx.uploader.calls(), 2);
    }

    #[actix_web::test]
    async fn test_avatar_upload_failure_is_upload_error() {
        let ctx = test_context_with(FakeUploader::failing_on("avatar.png"));

        let err = ctx
            .state
            .accounts
            .register(register_input("alice", "a@x.com"))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::UploadError(_)));
        assert_eq!(ctx.store.len(), 0);
    }

    #[actix_web::test]
    async fn test_cover_upload_failure_is_tolerated() {
        let ctx = test_context_with(FakeUploader::failing_on("cover.png"));
        let mut input = register_input("alice", "a@x.com");
        input.cover_image = Some(temp_upload(b"cover", "cover.png"));

        let profile = ctx.state.accounts.register(input).await.unwrap();

        assert!(profile.cover_image_url.is_none());
        assert_eq!(ctx.uploader.calls(), 2);
        assert!(ctx.uploader.uploaded_paths().iter().all(|p| !p.exists()));
    }

    #[actix_web::test]
    async fn test_login_by_username_or_email() {
        let ctx = test_context();
        let profile = registered(&ctx).await;

        let (by_name, tokens) = ctx.state.accounts.login(login("ALICE", "secret1")).await.unwrap();
        assert_eq!(by_name.id, profile.id);
        assert!(!tokens.access_token.is_empty());

        let by_email = LoginRequest {
            username: None,
            email: Some("a@x.com".to_string()),
            password: "secret1".to_string(),
        };
        assert!(ctx.state.accounts.login(by_email).await.is_ok());
    }

    #[actix_web::test]
    async fn test_login_failures() {
        let ctx = test_context();
        registered(&ctx).await;

        let wrong = ctx.state.accounts.login(login("alice", "wrong")).await.unwrap_err();
        assert!(matches!(wrong, AppError::Unauthorized(_)));

        let missing = ctx.state.accounts.login(login("nobody", "secret1")).await.unwrap_err();
        assert!(matches!(missing, AppError::NotFound(_)));

        let anonymous = LoginRequest {
            username: Some("  ".to_string()),
            email: None,
            password: "secret1".to_string(),
        };
        let err = ctx.state.accounts.login(anonymous).await.unwrap_err();
        assert!(matches!(err, AppError::ValidationError(_)));
    }

    #[actix_web::test]
    async fn test_logout_invalidates_refresh_token() {
        let ctx = test_context();
        let profile = registered(&ctx).await;
        let (_, tokens) = ctx.state.accounts.login(login("alice", "secret1")).await.unwrap();

        ctx.state.accounts.logout(&profile.id).await.unwrap();

        let err = ctx
            .state
            .accounts
            .refresh(Some(tokens.refresh_token))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::TokenMismatch(_)));
    }

    #[actix_web::test]
    async fn test_refresh_requires_token() {
        let ctx = test_context();
        let err = ctx.state.accounts.refresh(None).await.unwrap_err();
        assert!(matches!(err, AppError::Unauthorized(_)));
    }

    #[actix_web::test]
    async fn test_change_password() {
        let ctx = test_context();
        let profile = registered(&ctx).await;

        let request = |old: &str, new: &str, confirm: &str| ChangePasswordRequest {
            old_password: old.to_string(),
            new_password: new.to_string(),
            confirm_password: confirm.to_string(),
        };

        let mismatch = ctx
            .state
            .accounts
            .change_password(&profile.id, request("secret1", "next", "other"))
            .await
            .unwrap_err();
        assert!(matches!(mismatch, AppError::InvalidFields(_)));

        let wrong_old = ctx
            .state
            .accounts
            .change_password(&profile.id, request("wrong", "next", "next"))
            .await
            .unwrap_err();
        assert!(matches!(wrong_old, AppError::Unauthorized(_)));

        ctx.state
            .accounts
            .change_password(&profile.id, request("secret1", "next", "next"))
            .await
            .unwrap();

        assert!(ctx.state.accounts.login(login("alice", "secret1")).await.is_err());
        assert!(ctx.state.accounts.login(login("alice", "next")).await.is_ok());
    }

    #[actix_web::test]
    async fn test_update_profile_requires_a_field() {
        let ctx = test_context();
        let profile = registered(&ctx).await;

        let err = ctx
            .state
            .accounts
            .update_profile(&profile.id, UpdateAccountRequest::default())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::ValidationError(_)));

        let updated = ctx
            .state
            .accounts
            .update_profile(
                &profile.id,
                UpdateAccountRequest {
                    fullname: Some("Alice B".to_string()),
                    email: None,
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.full_name, "Alice B");
        assert_eq!(updated.email, "a@x.com");
    }

    #[actix_web::test]
    async fn test_update_avatar_and_cover() {
        let ctx = test_context();
        let profile = registered(&ctx).await;

        let missing = ctx.state.accounts.update_avatar(&profile.id, None).await.unwrap_err();
        assert!(matches!(missing, AppError::ValidationError(_)));

        let updated = ctx
            .state
            .accounts
            .update_avatar(&profile.id, Some(temp_upload(b"new", "new.png")))
            .await
            .unwrap();
        assert_eq!(updated.avatar_url, "https://cdn.example/new.png");

        let updated = ctx
            .state
            .accounts
            .update_cover_image(&profile.id, Some(temp_upload(b"cover", "cover.png")))
            .await
            .unwrap();
        assert_eq!(updated.cover_image_url.as_deref(), Some("https://cdn.example/cover.png"));
    }

    #[actix_web::test]
    async fn test_authenticate_access_token() {
        let ctx = test_context();
        let profile = registered(&ctx).await;
        let (_, tokens) = ctx.state.accounts.login(login("alice", "secret1")).await.unwrap();

        let resolved = ctx
            .state
            .accounts
            .authenticate_access_token(&tokens.access_token)
            .await
            .unwrap();
        assert_eq!(resolved.id, profile.id);

        let err = ctx
            .state
            .accounts
            .authenticate_access_token(&tokens.refresh_token)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Unauthorized(_)));

        ctx.clock.advance(chrono::Duration::minutes(16));
        let expired = ctx
            .state
            .accounts
            .authenticate_access_token(&tokens.access_token)
            .await
            .unwrap_err();
        assert!(matches!(expired, AppError::Unauthorized(_)));
    }
}
