//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! 계정 서비스의 모든 실패 경로를 하나의 [`AppError`]로 모읍니다.
//! `thiserror`와 `actix_web::ResponseError`를 사용하여 핸들러와 미들웨어 어디에서
//! 발생하든 동일한 에러 엔벨로프로 변환됩니다.
//!
//! ## 에러 엔벨로프
//!
//! ```json
//! {
//!   "statusCode": 409,
//!   "message": "이미 사용 중인 사용자명 또는 이메일입니다",
//!   "success": false,
//!   "errors": []
//! }
//! ```
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::core::errors::{AppError, AppResult};
//!
//! async fn find(store: &dyn AccountStore, id: &ObjectId) -> AppResult<Account> {
//!     store.find_by_id(id)
//!         .await?
//!         .ok_or_else(|| AppError::NotFound("계정을 찾을 수 없습니다".to_string()))
//! }
//! ```

use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use serde::Serialize;
use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// 요청 처리 중 발생하는 모든 에러를 포괄하며 자동으로 HTTP 응답으로 변환됩니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 입력값 검증 에러 (400 Bad Request)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 필드별 상세 정보를 포함한 입력값 검증 에러 (400 Bad Request)
    #[error("Validation error: {0}")]
    InvalidFields(#[from] validator::ValidationErrors),

    /// 충돌/중복 에러 (409 Conflict)
    #[error("Conflict error: {0}")]
    ConflictError(String),

    /// 리소스 찾을 수 없음 에러 (404 Not Found)
    #[error("Not found: {0}")]
    NotFound(String),

    /// 인증 실패 에러 (401 Unauthorized)
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// 서명/만료 검증에 실패한 토큰 (401 Unauthorized)
    #[error("Invalid token: {0}")]
    InvalidToken(String),

    /// 저장된 리프레시 토큰과 일치하지 않는 토큰 (401 Unauthorized)
    #[error("Token mismatch: {0}")]
    TokenMismatch(String),

    /// 미디어 업로드 실패 (502 Bad Gateway)
    #[error("Upload error: {0}")]
    UploadError(String),

    /// 데이터베이스 관련 에러 (500 Internal Server Error)
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 클라이언트에게 노출할 메시지
    ///
    /// 500 계열 에러는 내부 정보를 숨기고 일반 메시지로 대체합니다.
    pub fn client_message(&self) -> String {
        match self {
            AppError::ValidationError(msg)
            | AppError::ConflictError(msg)
            | AppError::NotFound(msg)
            | AppError::Unauthorized(msg)
            | AppError::InvalidToken(msg)
            | AppError::TokenMismatch(msg)
            | AppError::UploadError(msg) => msg.clone(),
            AppError::InvalidFields(_) => "입력값이 올바르지 않습니다".to_string(),
            AppError::DatabaseError(_) | AppError::InternalError(_) => {
                "요청을 처리하는 중 서버 오류가 발생했습니다".to_string()
            }
        }
    }

    fn field_errors(&self) -> Vec<FieldError> {
        let AppError::InvalidFields(errors) = self else {
            return Vec::new();
        };

        let mut fields: Vec<FieldError> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |err| FieldError {
                    field: field.to_string(),
                    message: err
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| err.code.to_string()),
                })
            })
            .collect();
        fields.sort_by(|a, b| a.field.cmp(&b.field));
        fields
    }
}

/// 에러 엔벨로프의 `errors` 배열 항목
#[derive(Debug, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// 에러 응답 바디
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorEnvelope {
    pub status_code: u16,
    pub message: String,
    pub success: bool,
    pub errors: Vec<FieldError>,
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) | AppError::InvalidFields(_) => StatusCode::BAD_REQUEST,
            AppError::ConflictError(_) => StatusCode::CONFLICT,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Unauthorized(_) | AppError::InvalidToken(_) | AppError::TokenMismatch(_) => {
                StatusCode::UNAUTHORIZED
            }
            AppError::UploadError(_) => StatusCode::BAD_GATEWAY,
            AppError::DatabaseError(_) | AppError::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 각 에러 타입을 적절한 HTTP 상태 코드와 에러 엔벨로프로 변환합니다.
    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();

        if status.is_server_error() {
            log::error!("요청 처리 실패: {}", self);
        }

        HttpResponse::build(status).json(ErrorEnvelope {
            status_code: status.as_u16(),
            message: self.client_message(),
            success: false,
            errors: self.field_errors(),
        })
    }
}

impl From<mongodb::error::Error> for AppError {
    fn from(err: mongodb::error::Error) -> Self {
        AppError::DatabaseError(err.to_string())
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;

    /// 클로저를 사용하여 지연 평가된 컨텍스트를 제공합니다.
    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use actix_web::ResponseError;
    use validator::Validate;

    #[test]
    fn test_status_code_mapping() {
        let cases = [
            (AppError::ValidationError("x".into()), StatusCode::BAD_REQUEST),
            (AppError::ConflictError("x".into()), StatusCode::CONFLICT),
            (AppError::NotFound("x".into()), StatusCode::NOT_FOUND),
            (AppError::Unauthorized("x".into()), StatusCode::UNAUTHORIZED),
            (AppError::InvalidToken("x".into()), StatusCode::UNAUTHORIZED),
            (AppError::TokenMismatch("x".into()), StatusCode::UNAUTHORIZED),
            (AppError::UploadError("x".into()), StatusCode::BAD_GATEWAY),
            (AppError::DatabaseError("x".into()), StatusCode::INTERNAL_SERVER_ERROR),
            (AppError::InternalError("x".into()), StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (error, expected) in cases {
            assert_eq!(error.error_response().status(), expected, "{:?}", error);
        }
    }

    #[actix_web::test]
    async fn test_error_envelope_shape() {
        let response = AppError::ConflictError("중복".to_string()).error_response();
        let body = to_bytes(response.into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(json["statusCode"], 409);
        assert_eq!(json["message"], "중복");
        assert_eq!(json["success"], false);
        assert!(json["errors"].as_array().unwrap().is_empty());
    }

    #[actix_web::test]
    async fn test_internal_error_hides_details() {
        let response = AppError::DatabaseError("connection refused at 10.0.0.3".to_string())
            .error_response();
        let body = to_bytes(response.into_body()).await.unwrap();
        let text = String::from_utf8(body.to_vec()).unwrap();

        assert!(!text.contains("10.0.0.3"));
    }

    #[derive(Validate)]
    struct NameForm {
        #[validate(length(min = 3, message = "너무 짧습니다"))]
        name: String,
    }

    #[actix_web::test]
    async fn test_field_errors_are_listed() {
        let err: AppError = NameForm { name: "a".into() }.validate().unwrap_err().into();
        let response = err.error_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = to_bytes(response.into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["errors"][0]["field"], "name");
        assert_eq!(json["errors"][0]["message"], "너무 짧습니다");
    }

    #[test]
    fn test_error_context_trait() {
        let result: Result<(), &str> = Err("original error");
        let app_result = result.context("Additional context");

        if let Err(AppError::InternalError(msg)) = app_result {
            assert!(msg.contains("Additional context"));
            assert!(msg.contains("original error"));
        } else {
            panic!("Expected InternalError");
        }
    }
}
