//! JWT 토큰 클레임

use serde::{Deserialize, Serialize};

/// 세션 토큰 클레임
///
/// 사용자 ID 외의 정보는 담지 않습니다. 만료(`exp`)가 세션의 유일한 종료 수단입니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    /// 사용자 ID (ObjectId hex)
    pub sub: String,
    /// 발급 시각 (unix seconds)
    pub iat: i64,
    /// 만료 시각 (unix seconds)
    pub exp: i64,
}
