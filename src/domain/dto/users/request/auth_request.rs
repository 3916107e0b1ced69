//! 인증 요청관련 DTO
//!
//! 로그인을 요청하는 사용자들의 요청 정보를 매핑합니다.
use serde::Deserialize;

/// 로그인 요청 구조체
///
/// 누락 시 단일 메시지로 응답하기 위해 두 필드 모두 `Option`입니다.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,

    pub password: Option<String>,
}

impl LoginRequest {
    /// 이메일과 비밀번호가 모두 비어있지 않으면 반환합니다.
    pub fn credentials(&self) -> Option<(&str, &str)> {
        let email = self.email.as_deref().map(str::trim).filter(|s| !s.is_empty())?;
        let password = self.password.as_deref().filter(|s| !s.is_empty())?;

        Some((email, password))
    }
}
