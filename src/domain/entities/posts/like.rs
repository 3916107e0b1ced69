//! Like Entity

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// 좋아요 대상
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LikeTarget {
    Post(String),
    Comment(String),
}

/// 좋아요 엔티티 (`likes` 컬렉션)
///
/// `post`와 `comment` 중 정확히 하나만 채워집니다.
/// (사용자, 대상) 조합당 최대 하나만 존재합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Like {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub post: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    /// 좋아요를 누른 사용자 ID
    pub user: String,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl Like {
    pub fn new(target: LikeTarget, user: String) -> Self {
        let now = DateTime::now();
        let (post, comment) = match target {
            LikeTarget::Post(id) => (Some(id), None),
            LikeTarget::Comment(id) => (None, Some(id)),
        };

        Self {
            id: None,
            post,
            comment,
            user,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn target(&self) -> Option<LikeTarget> {
        match (&self.post, &self.comment) {
            (Some(post), _) => Some(LikeTarget::Post(post.clone())),
            (None, Some(comment)) => Some(LikeTarget::Comment(comment.clone())),
            (None, None) => None,
        }
    }

    /// 이 좋아요가 주어진 대상을 가리키는지 확인
    pub fn targets(&self, target: &LikeTarget) -> bool {
        match target {
            LikeTarget::Post(id) => self.post.as_deref() == Some(id.as_str()),
            LikeTarget::Comment(id) => self.comment.as_deref() == Some(id.as_str()),
        }
    }
}
