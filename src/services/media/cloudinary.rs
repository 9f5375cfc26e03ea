//! Cloudinary 호환 서명 업로드 클라이언트
//!
//! `POST {base_url}/{cloud_name}/auto/upload` 로 multipart 요청을 보내며,
//! 서명은 정렬된 파라미터 문자열 뒤에 API secret을 붙여 SHA-256으로 계산합니다.

use std::collections::BTreeMap;

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use sha2::{Digest, Sha256};

use super::{LocalFile, MediaUploader, UploadedMedia};
use crate::config::MediaConfig;
use crate::core::errors::{AppError, AppResult};

#[derive(Debug, Deserialize)]
struct UploadResponse {
    secure_url: Option<String>,
    url: Option<String>,
}

pub struct CloudinaryUploader {
    client: reqwest::Client,
    config: MediaConfig,
}

impl CloudinaryUploader {
    pub fn new(config: MediaConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/{}/auto/upload",
            self.config.base_url.trim_end_matches('/'),
            self.config.cloud_name
        )
    }

    fn sign(&self, params: &BTreeMap<&'static str, String>) -> String {
        let joined = params
            .iter()
            .map(|(key, value)| format!("{}={}", key, value))
            .collect::<Vec<_>>()
            .join("&");

        format!("{:x}", Sha256::digest(format!("{}{}", joined, self.config.api_secret)))
    }

    async fn send(&self, file: &LocalFile) -> AppResult<UploadedMedia> {
        if self.config.cloud_name.is_empty() || self.config.api_key.is_empty() {
            return Err(AppError::UploadError(
                "미디어 저장소 설정이 없습니다".to_string(),
            ));
        }

        let bytes = file.read().await?;

        let mut params = BTreeMap::new();
        params.insert("timestamp", chrono::Utc::now().timestamp().to_string());
        if let Some(folder) = &self.config.folder {
            params.insert("folder", folder.clone());
        }
        let signature = self.sign(&params);

        let mut part = Part::bytes(bytes).file_name(file.file_name().to_string());
        if let Some(content_type) = file.content_type() {
            part = part.mime_str(content_type).map_err(|e| {
                AppError::ValidationError(format!("파일 형식이 올바르지 않습니다: {}", e))
            })?;
        }

        let mut form = Form::new()
            .text("api_key", self.config.api_key.clone())
            .text("signature", signature)
            .text("signature_algorithm", "sha256")
            .part("file", part);
        for (key, value) in params {
            form = form.text(key, value);
        }

        let response = self
            .client
            .post(self.endpoint())
            .multipart(form)
            .send()
            .await
            .map_err(|e| AppError::UploadError(format!("미디어 업로드 요청 실패: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            log::warn!("미디어 업로드 거부 ({}): {}", status, body);
            return Err(AppError::UploadError(format!(
                "미디어 업로드에 실패했습니다 ({})",
                status.as_u16()
            )));
        }

        let body: UploadResponse = response
            .json()
            .await
            .map_err(|e| AppError::UploadError(format!("업로드 응답을 해석할 수 없습니다: {}", e)))?;

        let url = body
            .secure_url
            .or(body.url)
            .filter(|url| !url.is_empty())
            .ok_or_else(|| AppError::UploadError("업로드 결과 URL이 없습니다".to_string()))?;

        Ok(UploadedMedia { url })
    }
}

#[async_trait]
impl MediaUploader for CloudinaryUploader {
    async fn upload(&self, file: LocalFile) -> AppResult<UploadedMedia> {
        let result = self.send(&file).await;
        file.close();

        match &result {
            Ok(media) => log::info!("📤 미디어 업로드 완료: {}", media.url),
            Err(e) => log::warn!("미디어 업로드 실패: {}", e),
        }
        result
    }
}
