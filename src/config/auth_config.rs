//! # Authentication Configuration Module
//!
//! JWT 세션 토큰 관련 설정을 관리하는 모듈입니다.
//! 서명 비밀키와 만료 기간은 시작 시점에 한 번 읽어 [`JwtConfig`] 값으로 만들고,
//! 이후에는 [`TokenService`](crate::services::auth::TokenService) 생성자에 주입됩니다.
//! 비즈니스 로직 안에서 환경 변수를 직접 읽지 않습니다.
//!
//! ## 필수 환경 변수 설정
//!
//! ```bash
//! export JWT_SECRET="your-super-secret-jwt-key"
//! export JWT_EXPIRATION_DAYS="7"
//! ```
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::JwtConfig;
//! use crate::services::auth::TokenService;
//!
//! let jwt_config = JwtConfig::from_env()?;
//! let token_service = TokenService::new(&jwt_config);
//! ```

use std::env;
use crate::config::Environment;
use crate::core::errors::AppError;

/// JWT 토큰 설정
///
/// ## 권장 설정값
///
/// - 비밀키: 최소 256비트 (32바이트), 환경별로 다른 키
/// - 만료: 7일 (세션 토큰은 서버 측에서 폐기되지 않으므로 만료가 유일한 종료 수단)
#[derive(Clone)]
pub struct JwtConfig {
    secret: String,
    expiration_days: i64,
}

impl JwtConfig {
    /// 기본 만료 기간 (일)
    pub const DEFAULT_EXPIRATION_DAYS: i64 = 7;

    /// 명시적인 값으로 설정을 생성합니다. 테스트에서 결정적인 비밀키를 쓸 때 사용합니다.
    pub fn new(secret: impl Into<String>, expiration_days: i64) -> Self {
        Self {
            secret: secret.into(),
            expiration_days,
        }
    }

    /// 환경 변수에서 JWT 설정을 읽어옵니다.
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - 프로덕션 환경에서 `JWT_SECRET`이 비어있는 경우
    ///
    /// # Environment Variables
    ///
    /// - `JWT_SECRET` - 서명 비밀키 (프로덕션에서 필수)
    /// - `JWT_EXPIRATION_DAYS` - 만료 기간 (기본값: 7)
    pub fn from_env() -> Result<Self, AppError> {
        let secret = match env::var("JWT_SECRET") {
            Ok(secret) if !secret.trim().is_empty() => secret,
            _ if Environment::resolved() == Environment::Production => {
                return Err(AppError::InternalError(
                    "JWT_SECRET must be set in production".to_string(),
                ));
            }
            _ => {
                log::warn!("JWT_SECRET not set, using default (not secure for production!)");
                "development-secret-key".to_string()
            }
        };

        let expiration_days = env::var("JWT_EXPIRATION_DAYS")
            .ok()
            .and_then(|v| v.parse::<i64>().ok())
            .filter(|days| *days > 0)
            .unwrap_or(Self::DEFAULT_EXPIRATION_DAYS);

        Ok(Self::new(secret, expiration_days))
    }

    /// 서명 비밀키
    pub fn secret(&self) -> &str {
        &self.secret
    }

    /// 토큰 만료 기간 (일)
    pub fn expiration_days(&self) -> i64 {
        self.expiration_days
    }
}

impl std::fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"***")
            .field("expiration_days", &self.expiration_days)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_output_hides_secret() {
        let config = JwtConfig::new("top-secret", 7);
        let rendered = format!("{:?}", config);

        assert!(!rendered.contains("top-secret"));
        assert!(rendered.contains("expiration_days: 7"));
    }

    #[test]
    fn test_explicit_values() {
        let config = JwtConfig::new("abc", 3);
        assert_eq!(config.secret(), "abc");
        assert_eq!(config.expiration_days(), 3);
    }
}
