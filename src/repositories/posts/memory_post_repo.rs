//! 인메모리 게시물 저장소

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use mongodb::bson::{oid::ObjectId, DateTime};

use crate::core::errors::{AppError, AppResult, DUPLICATE_KEY};
use crate::domain::entities::posts::{Comment, Like, LikeTarget, Post, PostChanges};
use crate::repositories::posts::PostRepository;
use crate::repositories::{parse_object_id, read_lock, write_lock};
use crate::utils::string_utils::contains_ignore_case;

#[derive(Default)]
pub struct InMemoryPostRepository {
    posts: RwLock<HashMap<ObjectId, Post>>,
    comments: RwLock<HashMap<ObjectId, Comment>>,
    likes: RwLock<HashMap<ObjectId, Like>>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

/// 최신 게시물이 먼저 오도록 정렬
fn newest_first(mut posts: Vec<Post>) -> Vec<Post> {
    posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    posts
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn create_post(&self, mut post: Post) -> AppResult<Post> {
        let id = ObjectId::new();
        post.id = Some(id);
        write_lock(&self.posts)?.insert(id, post.clone());

        Ok(post)
    }

    async fn find_post(&self, id: &str) -> AppResult<Option<Post>> {
        let object_id = parse_object_id(id)?;

        Ok(read_lock(&self.posts)?.get(&object_id).cloned())
    }

    async fn update_post(&self, id: &str, changes: PostChanges) -> AppResult<Option<Post>> {
        let object_id = parse_object_id(id)?;
        let mut posts = write_lock(&self.posts)?;

        let Some(post) = posts.get_mut(&object_id) else {
            return Ok(None);
        };

        post.text = changes.text;
        post.hashtags = changes.hashtags;
        if let Some(image_url) = changes.image_url {
            post.image_url = Some(image_url);
        }
        post.updated_at = DateTime::now();

        Ok(Some(post.clone()))
    }

    async fn delete_post(&self, id: &str) -> AppResult<bool> {
        let object_id = parse_object_id(id)?;

        Ok(write_lock(&self.posts)?.remove(&object_id).is_some())
    }

    async fn find_posts_by_tags(&self, tags: &[String]) -> AppResult<Vec<Post>> {
        let posts = read_lock(&self.posts)?;

        let found = posts
            .values()
            .filter(|post| post.hashtags.iter().any(|tag| tags.contains(tag)))
            .cloned()
            .collect();

        Ok(newest_first(found))
    }

    async fn search_posts_by_text(&self, text: &str) -> AppResult<Vec<Post>> {
        let posts = read_lock(&self.posts)?;

        let found = posts
            .values()
            .filter(|post| contains_ignore_case(&post.text, text))
            .cloned()
            .collect();

        Ok(newest_first(found))
    }

    async fn increment_view_count(&self, id: &str) -> AppResult<Option<Post>> {
        let object_id = parse_object_id(id)?;
        let mut posts = write_lock(&self.posts)?;

        Ok(posts.get_mut(&object_id).map(|post| {
            post.view_count += 1;
            post.updated_at = DateTime::now();
            post.clone()
        }))
    }

    async fn create_comment(&self, mut comment: Comment) -> AppResult<Comment> {
        let id = ObjectId::new();
        comment.id = Some(id);
        write_lock(&self.comments)?.insert(id, comment.clone());

        Ok(comment)
    }

    async fn find_comment(&self, id: &str) -> AppResult<Option<Comment>> {
        let object_id = parse_object_id(id)?;

        Ok(read_lock(&self.comments)?.get(&object_id).cloned())
    }

    async fn find_comment_ids_by_post(&self, post_id: &str) -> AppResult<Vec<String>> {
        let comments = read_lock(&self.comments)?;

        Ok(comments
            .values()
            .filter(|comment| comment.post == post_id)
            .filter_map(Comment::id_string)
            .collect())
    }

    async fn update_comment(&self, id: &str, text: String) -> AppResult<Option<Comment>> {
        let object_id = parse_object_id(id)?;
        let mut comments = write_lock(&self.comments)?;

        Ok(comments.get_mut(&object_id).map(|comment| {
            comment.text = text;
            comment.updated_at = DateTime::now();
            comment.clone()
        }))
    }

    async fn delete_comment(&self, id: &str) -> AppResult<bool> {
        let object_id = parse_object_id(id)?;

        Ok(write_lock(&self.comments)?.remove(&object_id).is_some())
    }

    async fn delete_comments_by_post(&self, post_id: &str) -> AppResult<u64> {
        let mut comments = write_lock(&self.comments)?;
        let before = comments.len();
        comments.retain(|_, comment| comment.post != post_id);

        Ok((before - comments.len()) as u64)
    }

    async fn find_like(&self, target: &LikeTarget, user_id: &str) -> AppResult<Option<Like>> {
        let likes = read_lock(&self.likes)?;

        Ok(likes
            .values()
            .find(|like| like.user == user_id && like.targets(target))
            .cloned())
    }

    async fn create_like(&self, mut like: Like) -> AppResult<Like> {
        let mut likes = write_lock(&self.likes)?;

        // (대상, 사용자) 유니크 인덱스와 같은 규칙
        let duplicate = like.target().is_some_and(|target| {
            likes
                .values()
                .any(|existing| existing.user == like.user && existing.targets(&target))
        });
        if duplicate {
            return Err(AppError::ConflictError(DUPLICATE_KEY.to_string()));
        }

        let id = ObjectId::new();
        like.id = Some(id);
        likes.insert(id, like.clone());

        Ok(like)
    }

    async fn delete_likes(&self, target: &LikeTarget) -> AppResult<u64> {
        let mut likes = write_lock(&self.likes)?;
        let before = likes.len();
        likes.retain(|_, like| !like.targets(target));

        Ok((before - likes.len()) as u64)
    }

    async fn delete_likes_for_comments(&self, comment_ids: &[String]) -> AppResult<u64> {
        let mut likes = write_lock(&self.likes)?;
        let before = likes.len();
        likes.retain(|_, like| {
            like.comment
                .as_ref()
                .is_none_or(|comment| !comment_ids.contains(comment))
        });

        Ok((before - likes.len()) as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(text: &str, tags: &[&str]) -> Post {
        Post::new(
            "u1".to_string(),
            text.to_string(),
            None,
            tags.iter().map(|t| t.to_string()).collect(),
        )
    }

    #[actix_web::test]
    async fn test_second_like_on_same_target_is_duplicate_key() {
        let repo = InMemoryPostRepository::new();
        let target = LikeTarget::Post("p1".to_string());
        repo.create_like(Like::new(target.clone(), "u1".to_string())).await.unwrap();

        match repo.create_like(Like::new(target.clone(), "u1".to_string())).await {
            Err(AppError::ConflictError(msg)) => assert_eq!(msg, DUPLICATE_KEY),
            other => panic!("unexpected result: {:?}", other),
        }

        // 다른 사용자나 같은 ID의 댓글은 별개의 좋아요
        repo.create_like(Like::new(target, "u2".to_string())).await.unwrap();
        repo.create_like(Like::new(LikeTarget::Comment("p1".to_string()), "u1".to_string()))
            .await
            .unwrap();
    }

    #[actix_web::test]
    async fn test_tag_and_text_search() {
        let repo = InMemoryPostRepository::new();
        repo.create_post(post("Hello Rust", &["rust", "web"])).await.unwrap();
        repo.create_post(post("cooking notes", &["food"])).await.unwrap();

        let by_tag = repo.find_posts_by_tags(&["web".to_string(), "none".to_string()]).await.unwrap();
        assert_eq!(by_tag.len(), 1);
        assert_eq!(by_tag[0].text, "Hello Rust");

        let by_text = repo.search_posts_by_text("RUST").await.unwrap();
        assert_eq!(by_text.len(), 1);
    }

    #[actix_web::test]
    async fn test_increment_view_count() {
        let repo = InMemoryPostRepository::new();
        let id = repo.create_post(post("hi", &[])).await.unwrap().id_string().unwrap();

        repo.increment_view_count(&id).await.unwrap();
        let updated = repo.increment_view_count(&id).await.unwrap().unwrap();

        assert_eq!(updated.view_count, 2);
    }

    #[actix_web::test]
    async fn test_delete_likes_for_comments_keeps_post_likes() {
        let repo = InMemoryPostRepository::new();
        repo.create_like(Like::new(LikeTarget::Comment("c1".to_string()), "u1".to_string()))
            .await
            .unwrap();
        repo.create_like(Like::new(LikeTarget::Post("p1".to_string()), "u1".to_string()))
            .await
            .unwrap();

        let removed = repo.delete_likes_for_comments(&["c1".to_string()]).await.unwrap();

        assert_eq!(removed, 1);
        assert!(repo
            .find_like(&LikeTarget::Post("p1".to_string()), "u1")
            .await
            .unwrap()
            .is_some());
    }
}
