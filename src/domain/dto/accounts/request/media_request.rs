//! 아바타/커버 이미지 교체 요청 DTO

use actix_multipart::form::tempfile::TempFile;
use actix_multipart::form::MultipartForm;

use crate::services::media::LocalFile;

#[derive(Debug, MultipartForm)]
pub struct AvatarForm {
    pub avatar: Option<TempFile>,
}

impl AvatarForm {
    pub fn into_file(self) -> Option<LocalFile> {
        self.avatar.map(LocalFile::from)
    }
}

#[derive(Debug, MultipartForm)]
pub struct CoverImageForm {
    #[multipart(rename = "coverImage")]
    pub cover_image: Option<TempFile>,
}

impl CoverImageForm {
    pub fn into_file(self) -> Option<LocalFile> {
        self.cover_image.map(LocalFile::from)
    }
}
