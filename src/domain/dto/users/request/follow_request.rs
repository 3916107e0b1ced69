//! 팔로우 관계 요청 DTO

use serde::{Deserialize, Serialize};

/// `POST /v1/user/follow` 요청 본문
#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FollowRequest {
    pub user_id_to_follow: Option<String>,
}

/// `POST /v1/user/unfollow` 요청 본문
#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnfollowRequest {
    pub user_id_to_unfollow: Option<String>,
}

/// `GET /v1/user/search` 쿼리
#[derive(Debug, Deserialize)]
pub struct UserSearchQuery {
    pub name: Option<String>,
}
