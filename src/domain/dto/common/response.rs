use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use serde::Serialize;

/// API 성공 응답 래퍼
///
/// `{statusCode, data, message, success}` 형태로 직렬화됩니다.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    pub status_code: u16,
    pub data: T,
    pub message: String,
    pub success: bool,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn ok(data: T, message: impl Into<String>) -> Self {
        Self {
            status_code: StatusCode::OK.as_u16(),
            data,
            message: message.into(),
            success: true,
        }
    }

    /// `200 OK` 응답으로 변환합니다.
    pub fn into_http(self) -> HttpResponse {
        HttpResponse::Ok().json(self)
    }
}

/// 빈 `data` 페이로드 (`{}`)
#[derive(Debug, Default, Serialize)]
pub struct Empty {}
