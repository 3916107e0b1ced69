//! # JWT 세션 토큰 서비스
//!
//! HS256으로 서명된 세션 토큰을 발급하고 검증합니다.
//! 비밀키는 [`JwtConfig`]로 생성 시점에 주입되며, 서비스는 사용자 정보를 캐시하지 않습니다.
//!
//! ```rust,ignore
//! let tokens = TokenService::new(&JwtConfig::new("secret", 7));
//! let token = tokens.issue(&user_id)?;
//! assert_eq!(tokens.verify(&token)?, user_id);
//! ```

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, errors::ErrorKind, DecodingKey, EncodingKey, Header, Validation};
use thiserror::Error;

use crate::config::JwtConfig;
use crate::core::errors::AppError;
use crate::domain::models::token::TokenClaims;

/// 토큰 검증 실패 사유
///
/// 두 경우 모두 클라이언트에는 같은 메시지로 응답하고, 구분은 로그에만 남깁니다.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    /// `exp`가 지난 토큰
    #[error("token expired")]
    Expired,
    /// 서명 불일치, 구조 오류, 다른 알고리즘 등
    #[error("token malformed: {0}")]
    Malformed(String),
}

pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    lifetime: Duration,
}

impl TokenService {
    pub fn new(config: &JwtConfig) -> Self {
        let mut validation = Validation::default();
        // 만료 시각을 정확히 적용
        validation.leeway = 0;

        Self {
            encoding_key: EncodingKey::from_secret(config.secret().as_bytes()),
            decoding_key: DecodingKey::from_secret(config.secret().as_bytes()),
            validation,
            lifetime: Duration::days(config.expiration_days()),
        }
    }

    /// 현재 시각 기준으로 세션 토큰을 발급합니다.
    pub fn issue(&self, user_id: &str) -> Result<String, AppError> {
        self.issue_at(user_id, Utc::now())
    }

    /// 주어진 발급 시각으로 세션 토큰을 발급합니다.
    ///
    /// `exp = iat + 만료 기간`입니다.
    pub fn issue_at(&self, user_id: &str, issued_at: DateTime<Utc>) -> Result<String, AppError> {
        let claims = TokenClaims {
            sub: user_id.to_string(),
            iat: issued_at.timestamp(),
            exp: (issued_at + self.lifetime).timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::InternalError(format!("JWT 토큰 생성 실패: {}", e)))
    }

    /// 토큰을 검증하고 사용자 ID(`sub`)를 반환합니다.
    pub fn verify(&self, token: &str) -> Result<String, TokenError> {
        decode::<TokenClaims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims.sub)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::Malformed(e.to_string()),
            })
    }

    /// `Authorization` 헤더 값에서 Bearer 토큰을 꺼냅니다.
    pub fn extract_bearer_token<'a>(&self, auth_header: &'a str) -> Result<&'a str, AppError> {
        match auth_header.strip_prefix("Bearer ") {
            Some(token) if !token.trim().is_empty() => Ok(token.trim()),
            _ => Err(AppError::AuthenticationError(
                "You are not authorised to access this resource".to_string(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> TokenService {
        TokenService::new(&JwtConfig::new("test-secret", 7))
    }

    #[test]
    fn test_issue_then_verify_returns_subject() {
        let tokens = service();
        let token = tokens.issue("65f0c0ffee0000000000abcd").unwrap();

        assert_eq!(tokens.verify(&token).unwrap(), "65f0c0ffee0000000000abcd");
    }

    #[test]
    fn test_expired_token_is_rejected_as_expired() {
        let tokens = service();
        let token = tokens
            .issue_at("user", Utc::now() - Duration::days(8))
            .unwrap();

        assert_eq!(tokens.verify(&token), Err(TokenError::Expired));
    }

    #[test]
    fn test_token_signed_with_other_secret_is_malformed() {
        let other = TokenService::new(&JwtConfig::new("other-secret", 7));
        let token = other.issue("user").unwrap();

        assert!(matches!(service().verify(&token), Err(TokenError::Malformed(_))));
    }

    #[test]
    fn test_garbage_token_is_malformed() {
        assert!(matches!(service().verify("not.a.jwt"), Err(TokenError::Malformed(_))));
    }

    #[test]
    fn test_extract_bearer_token() {
        let tokens = service();

        assert_eq!(tokens.extract_bearer_token("Bearer abc").unwrap(), "abc");
        assert!(tokens.extract_bearer_token("Basic abc").is_err());
        assert!(tokens.extract_bearer_token("Bearer ").is_err());
    }
}
