//! 사용자 응답 DTO
//!
//! 외부로 노출되는 사용자 표현(IdentityPublic)입니다.
//! 비밀번호 관련 필드는 타입에 존재하지 않으므로 어떤 응답에도 실릴 수 없습니다.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::dto::common::to_utc;
use crate::domain::entities::users::User;
use crate::utils::string_utils::dedupe_preserving_order;

/// 공개 사용자 정보
///
/// ```json
/// {
///   "id": "65f0c0ffee0000000000abcd",
///   "name": "Jo",
///   "email": "jo@x.com",
///   "mobile": "111",
///   "followers": [],
///   "following": [],
///   "createdAt": "2024-01-01T00:00:00Z",
///   "updatedAt": "2024-01-01T00:00:00Z"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub mobile: String,
    pub followers: Vec<String>,
    pub following: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    /// 팔로우 목록은 읽는 시점에 중복을 제거합니다.
    fn from(user: User) -> Self {
        let User {
            id,
            name,
            email,
            mobile,
            followers,
            following,
            created_at,
            updated_at,
            ..
        } = user;

        Self {
            id: id.map(|id| id.to_hex()).unwrap_or_default(),
            name,
            email,
            mobile,
            followers: dedupe_preserving_order(followers),
            following: dedupe_preserving_order(following),
            created_at: to_utc(created_at),
            updated_at: to_utc(updated_at),
        }
    }
}

/// 로그인 응답
///
/// 토큰은 본문으로만 전달되며, 클라이언트는 이후 `Authorization: Bearer` 헤더로 제시합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub status: String,
    pub access_token: String,
    pub message: String,
}

impl LoginResponse {
    pub fn new(access_token: String) -> Self {
        Self {
            status: "success".to_string(),
            access_token,
            message: "You have successfully logged in.".to_string(),
        }
    }
}
