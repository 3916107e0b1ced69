//! Post Entity

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// 게시물 엔티티 (`posts` 컬렉션)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 작성자 사용자 ID
    pub user: String,
    pub text: String,
    /// 클라이언트가 넘겨준 이미지 URL (불투명 문자열)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default)]
    pub hashtags: Vec<String>,
    #[serde(default)]
    pub view_count: i64,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl Post {
    pub fn new(user: String, text: String, image_url: Option<String>, hashtags: Vec<String>) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            user,
            text,
            image_url,
            hashtags,
            view_count: 0,
            created_at: now,
            updated_at: now,
        }
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }

    /// 주어진 사용자가 작성자인지 확인
    pub fn is_owned_by(&self, user_id: &str) -> bool {
        self.user == user_id
    }
}

/// 게시물 수정 내용
#[derive(Debug, Clone)]
pub struct PostChanges {
    pub text: String,
    pub image_url: Option<String>,
    pub hashtags: Vec<String>,
}

/// 쉼표로 구분된 해시태그 문자열을 목록으로 변환합니다.
///
/// 각 항목은 앞뒤 공백이 제거되고, 빈 항목은 버려집니다.
pub fn split_hashtags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_hashtags_trims_and_drops_empty() {
        assert_eq!(
            split_hashtags(" rust, web ,,api "),
            vec!["rust".to_string(), "web".to_string(), "api".to_string()]
        );
        assert!(split_hashtags("").is_empty());
        assert!(split_hashtags(" , ").is_empty());
    }

    #[test]
    fn test_new_post_starts_with_zero_views() {
        let post = Post::new("u1".to_string(), "hello".to_string(), None, vec![]);

        assert_eq!(post.view_count, 0);
        assert!(post.is_owned_by("u1"));
        assert!(!post.is_owned_by("u2"));
    }
}
