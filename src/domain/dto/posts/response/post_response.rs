//! 게시물 / 댓글 / 좋아요 응답 DTO

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::dto::common::to_utc;
use crate::domain::entities::posts::{Comment, Like, Post};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostResponse {
    pub id: String,
    pub user: String,
    pub text: String,
    pub image_url: Option<String>,
    pub hashtags: Vec<String>,
    pub view_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Post> for PostResponse {
    fn from(post: Post) -> Self {
        Self {
            id: post.id.map(|id| id.to_hex()).unwrap_or_default(),
            user: post.user,
            text: post.text,
            image_url: post.image_url,
            hashtags: post.hashtags,
            view_count: post.view_count,
            created_at: to_utc(post.created_at),
            updated_at: to_utc(post.updated_at),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentResponse {
    pub id: String,
    pub post: String,
    pub user: String,
    pub text: String,
    pub parent: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Comment> for CommentResponse {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id.map(|id| id.to_hex()).unwrap_or_default(),
            post: comment.post,
            user: comment.user,
            text: comment.text,
            parent: comment.parent,
            created_at: to_utc(comment.created_at),
            updated_at: to_utc(comment.updated_at),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LikeResponse {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    pub user: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Like> for LikeResponse {
    fn from(like: Like) -> Self {
        Self {
            id: like.id.map(|id| id.to_hex()).unwrap_or_default(),
            post: like.post,
            comment: like.comment,
            user: like.user,
            created_at: to_utc(like.created_at),
            updated_at: to_utc(like.updated_at),
        }
    }
}
