//! 사용자 생성 요청 DTO
//!
//! 회원가입(`/v1/auth/register`)과 관리자 생성(`/v1/user/createUser`)이
//! 같은 요청 본문을 공유합니다.

use serde::Deserialize;
use validator::Validate;

use crate::core::errors::AppError;
use crate::utils::string_utils::validate_required_string;

/// 필수 필드 누락 시 응답 메시지
pub const REQUIRED_FIELDS_MISSING: &str = "Required fields are missing";

/// 사용자 생성 요청 구조체
///
/// 필드 누락을 하나의 메시지로 응답하기 위해 모든 필드를 `Option`으로 받습니다.
///
/// ```json
/// {
///   "name": "Jo",
///   "email": "jo@x.com",
///   "mobile": "111",
///   "password": "secret1"
/// }
/// ```
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateUserRequest {
    pub name: Option<String>,

    pub email: Option<String>,

    pub mobile: Option<String>,

    #[validate(length(min = 6, message = "Password must be at least 6 characters long"))]
    pub password: Option<String>,
}

/// 검증을 통과한 사용자 생성 입력
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub mobile: String,
    pub password: String,
}

impl CreateUserRequest {
    /// 필수 필드 존재 여부와 비밀번호 길이를 검증하고 정제된 입력을 반환합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - 필드 누락/공백, 비밀번호 6자 미만
    pub fn into_new_user(self) -> Result<NewUser, AppError> {
        let required = |value: &Option<String>| {
            validate_required_string(value.as_deref(), "field")
                .map_err(|_| AppError::ValidationError(REQUIRED_FIELDS_MISSING.to_string()))
        };

        let name = required(&self.name)?;
        let email = required(&self.email)?;
        let mobile = required(&self.mobile)?;
        // 비밀번호는 공백도 의미가 있으므로 trim 결과는 존재 여부 확인에만 사용
        required(&self.password)?;

        self.validate()
            .map_err(|e| AppError::ValidationError(e.to_string()))?;

        Ok(NewUser {
            name,
            email,
            mobile,
            password: self.password.unwrap_or_default(),
        })
    }
}
