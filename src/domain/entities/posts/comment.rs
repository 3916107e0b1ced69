//! Comment Entity

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// 댓글 엔티티 (`comments` 컬렉션)
///
/// `parent`가 있으면 같은 게시물에 달린 다른 댓글에 대한 답글입니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 게시물 ID
    pub post: String,
    /// 작성자 사용자 ID
    pub user: String,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl Comment {
    pub fn new(post: String, user: String, text: String, parent: Option<String>) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            post,
            user,
            text,
            parent,
            created_at: now,
            updated_at: now,
        }
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }

    pub fn is_owned_by(&self, user_id: &str) -> bool {
        self.user == user_id
    }
}
