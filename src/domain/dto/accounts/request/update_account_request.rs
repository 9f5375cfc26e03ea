use serde::Deserialize;
use validator::Validate;

use crate::domain::entities::accounts::ProfileUpdate;
use crate::utils::string_utils::deserialize_optional_string;

/// 프로필 수정 요청 DTO
///
/// 공백만 있는 값은 역직렬화 시점에 `None`으로 바뀝니다.
/// 최소 하나의 필드가 필요하다는 규칙은 서비스 계층에서 검사합니다.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateAccountRequest {
    #[serde(default, alias = "fullName", deserialize_with = "deserialize_optional_string")]
    #[validate(length(max = 100, message = "표시 이름은 100자 이하여야 합니다"))]
    pub fullname: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: Option<String>,
}

impl From<UpdateAccountRequest> for ProfileUpdate {
    fn from(req: UpdateAccountRequest) -> Self {
        Self {
            full_name: req.fullname,
            email: req.email,
        }
    }
}
