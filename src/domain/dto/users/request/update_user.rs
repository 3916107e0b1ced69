//! 사용자 수정 요청 DTO

use serde::Deserialize;
use validator::Validate;

use crate::utils::string_utils::clean_optional_string;

/// 사용자 부분 수정 요청
///
/// 생략되거나 공백인 필드는 변경하지 않습니다.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateUserRequest {
    pub name: Option<String>,

    pub email: Option<String>,

    pub mobile: Option<String>,

    #[validate(length(min = 6, message = "Password must be at least 6 characters long"))]
    pub password: Option<String>,
}

impl UpdateUserRequest {
    /// 공백 필드를 `None`으로 정리한 요청을 반환합니다.
    pub fn cleaned(self) -> Self {
        Self {
            name: clean_optional_string(self.name),
            email: clean_optional_string(self.email),
            mobile: clean_optional_string(self.mobile),
            password: self.password.filter(|p| !p.is_empty()),
        }
    }
}
