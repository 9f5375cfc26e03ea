//! 계정 등록 요청 DTO
//!
//! `multipart/form-data` 본문을 매핑합니다. 파일 파트는 `actix-multipart`가
//! 업로드 임시 디렉터리에 버퍼링한 뒤 [`TempFile`]로 전달합니다.

use actix_multipart::form::tempfile::TempFile;
use actix_multipart::form::text::Text;
use actix_multipart::form::MultipartForm;

use crate::services::media::LocalFile;

/// 등록 multipart 폼
///
/// 텍스트 필드가 빠져도 폼 파싱은 실패하지 않으며, 공백 검사는 서비스 계층에서 수행합니다.
#[derive(Debug, MultipartForm)]
pub struct RegisterForm {
    pub username: Option<Text<String>>,
    pub fullname: Option<Text<String>>,
    pub email: Option<Text<String>>,
    pub password: Option<Text<String>>,
    pub avatar: Option<TempFile>,
    #[multipart(rename = "coverImage")]
    pub cover_image: Option<TempFile>,
}

/// 프레임워크에 독립적인 등록 입력
#[derive(Debug, Default)]
pub struct RegisterInput {
    pub username: String,
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub avatar: Option<LocalFile>,
    pub cover_image: Option<LocalFile>,
}

impl From<RegisterForm> for RegisterInput {
    fn from(form: RegisterForm) -> Self {
        fn text(field: Option<Text<String>>) -> String {
            field.map(|value| value.0).unwrap_or_default()
        }

        Self {
            username: text(form.username),
            full_name: text(form.fullname),
            email: text(form.email),
            password: text(form.password),
            avatar: form.avatar.map(LocalFile::from),
            cover_image: form.cover_image.map(LocalFile::from),
        }
    }
}
