//! 미디어 업로드 서비스 모듈
//!
//! 아바타/커버 이미지를 외부 오브젝트 스토리지에 올리고 영구 URL을 돌려받습니다.
//! 업로드 성공 여부와 관계없이 로컬 임시 파일은 업로더 호출이 반환되기 전에 삭제됩니다.

pub mod cloudinary;
pub mod local_file;

pub use cloudinary::CloudinaryUploader;
pub use local_file::LocalFile;

use async_trait::async_trait;

use crate::core::errors::AppResult;

/// 업로드 결과
#[derive(Debug, Clone, PartialEq)]
pub struct UploadedMedia {
    pub url: String,
}

/// 미디어 업로더 포트
#[async_trait]
pub trait MediaUploader: Send + Sync {
    /// 파일을 업로드합니다. 결과와 무관하게 `file`은 삭제됩니다.
    async fn upload(&self, file: LocalFile) -> AppResult<UploadedMedia>;
}
