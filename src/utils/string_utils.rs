//! # 문자열 유틸리티
//!
//! 요청 입력 정리와 식별자 정규화에 사용하는 공통 함수들입니다.

use serde::Deserialize;

use crate::core::errors::AppError;

/// 필수 문자열 필드 검증 및 정리
///
/// 빈 문자열이나 공백만 있는 경우 ValidationError를 반환하고,
/// 유효한 문자열인 경우 앞뒤 공백을 제거한 문자열을 반환합니다.
///
/// # 예제
/// ```rust,ignore
/// use crate::utils::string_utils::validate_required_string;
///
/// assert_eq!(validate_required_string("  Hello  ", "name").unwrap(), "Hello");
/// assert!(validate_required_string("   ", "name").is_err());
/// ```
pub fn validate_required_string(value: &str, field_name: &str) -> Result<String, AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::ValidationError(format!(
            "{}은(는) 필수입니다",
            field_name
        )));
    }
    Ok(trimmed.to_string())
}

/// 선택적 문자열 필드 정리
///
/// None 값이거나 빈 문자열/공백만 있는 경우 None을 반환합니다.
pub fn clean_optional_string(value: Option<String>) -> Option<String> {
    value.and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// 사용자명/이메일 정규화 (앞뒤 공백 제거 + 소문자)
///
/// 저장과 조회 양쪽에서 같은 규칙을 적용해야 유일성 검사가 대소문자와 무관해집니다.
pub fn normalize_identifier(value: &str) -> String {
    value.trim().to_lowercase()
}

/// 선택적 문자열 필드를 위한 serde deserializer
///
/// `#[serde(default, deserialize_with = "deserialize_optional_string")]`와 함께 사용하며,
/// 빈 문자열이나 공백만 있는 문자열을 None으로 변환합니다.
pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(clean_optional_string(opt))
}
