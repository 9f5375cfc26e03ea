use std::path::Path;

use actix_multipart::form::tempfile::TempFile;
use actix_web::web;
use tempfile::NamedTempFile;

use crate::core::errors::{AppError, AppResult};

/// 업로드 대기 중인 로컬 임시 파일
///
/// 소유권이 업로더로 넘어가며, drop 또는 [`LocalFile::close`] 시 디스크에서 삭제됩니다.
#[derive(Debug)]
pub struct LocalFile {
    file: NamedTempFile,
    file_name: Option<String>,
    content_type: Option<String>,
    size: usize,
}

impl From<TempFile> for LocalFile {
    fn from(temp: TempFile) -> Self {
        Self {
            file: temp.file,
            file_name: temp.file_name,
            content_type: temp.content_type.map(|mime| mime.to_string()),
            size: temp.size,
        }
    }
}

impl LocalFile {
    pub fn new(
        file: NamedTempFile,
        file_name: Option<String>,
        content_type: Option<String>,
        size: usize,
    ) -> Self {
        Self {
            file,
            file_name,
            content_type,
            size,
        }
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    pub fn file_name(&self) -> &str {
        self.file_name.as_deref().unwrap_or("upload")
    }

    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// 파일 내용을 블로킹 스레드풀에서 읽습니다.
    pub async fn read(&self) -> AppResult<Vec<u8>> {
        let path = self.path().to_path_buf();

        web::block(move || std::fs::read(path))
            .await
            .map_err(|e| AppError::InternalError(format!("파일 읽기 작업 실패: {}", e)))?
            .map_err(|e| AppError::InternalError(format!("업로드 임시 파일 읽기 실패: {}", e)))
    }

    /// 임시 파일을 삭제합니다. 삭제 실패는 기록만 합니다.
    pub fn close(self) {
        let path = self.path().to_path_buf();
        if let Err(e) = self.file.close() {
            log::warn!("임시 파일 삭제 실패 {}: {}", path.display(), e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::temp_upload;

    #[actix_web::test]
    async fn test_read_then_close_removes_file() {
        let file = temp_upload(b"avatar-bytes", "a.png");
        let path = file.path().to_path_buf();

        assert_eq!(file.read().await.unwrap(), b"avatar-bytes");
        assert_eq!(file.file_name(), "a.png");
        assert_eq!(file.size(), 12);
        assert_eq!(file.content_type(), Some("image/png"));

        file.close();
        assert!(!path.exists());
    }

    #[test]
    fn test_drop_removes_file() {
        let file = temp_upload(b"x", "x.png");
        let path = file.path().to_path_buf();

        drop(file);
        assert!(!path.exists());
    }
}
