//! 인증 요청관련 DTO
//!
//! 로그인, 토큰 갱신, 비밀번호 변경 요청을 매핑합니다.
use serde::Deserialize;
use validator::{Validate, ValidationError};

/// 로그인 요청 구조체
///
/// `username`과 `email` 중 하나 이상이 필요합니다.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    pub username: Option<String>,

    pub email: Option<String>,

    #[validate(length(min = 1, message = "비밀번호를 입력해주세요"))]
    pub password: String,
}

/// 리프레시 토큰 요청 구조체
///
/// 쿠키가 없을 때만 본문의 토큰을 사용합니다.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshTokenRequest {
    pub refresh_token: Option<String>,
}

/// 비밀번호 변경 요청 구조체
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_passwords_match"))]
pub struct ChangePasswordRequest {
    #[validate(length(min = 1, message = "현재 비밀번호를 입력해주세요"))]
    pub old_password: String,

    #[validate(length(min = 1, message = "새 비밀번호를 입력해주세요"))]
    pub new_password: String,

    pub confirm_password: String,
}

/// 새 비밀번호와 확인 비밀번호 일치 여부를 검증
fn validate_passwords_match(req: &ChangePasswordRequest) -> Result<(), ValidationError> {
    if req.new_password != req.confirm_password {
        return Err(ValidationError::new("passwords_mismatch")
            .with_message("새 비밀번호와 확인 비밀번호가 일치하지 않습니다".into()));
    }
    Ok(())
}
