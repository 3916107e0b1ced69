//! 게시물 저장소 인터페이스

use async_trait::async_trait;

use crate::core::errors::AppResult;
use crate::domain::entities::posts::{Comment, Like, LikeTarget, Post, PostChanges};

/// 게시물, 댓글, 좋아요 저장소
///
/// 소유권 검사와 연쇄 삭제 순서는 서비스 계층이 결정하고,
/// 저장소는 단일 컬렉션 연산만 제공합니다.
#[async_trait]
pub trait PostRepository: Send + Sync {
    async fn create_post(&self, post: Post) -> AppResult<Post>;

    async fn find_post(&self, id: &str) -> AppResult<Option<Post>>;

    /// 본문, 이미지, 해시태그를 교체합니다.
    async fn update_post(&self, id: &str, changes: PostChanges) -> AppResult<Option<Post>>;

    async fn delete_post(&self, id: &str) -> AppResult<bool>;

    /// 주어진 태그 중 하나라도 가진 게시물
    async fn find_posts_by_tags(&self, tags: &[String]) -> AppResult<Vec<Post>>;

    /// 본문에 주어진 문자열을 포함하는 게시물 (대소문자 무시)
    async fn search_posts_by_text(&self, text: &str) -> AppResult<Vec<Post>>;

    /// 조회수를 원자적으로 1 증가시키고 갱신된 게시물을 반환합니다.
    async fn increment_view_count(&self, id: &str) -> AppResult<Option<Post>>;

    async fn create_comment(&self, comment: Comment) -> AppResult<Comment>;

    async fn find_comment(&self, id: &str) -> AppResult<Option<Comment>>;

    /// 게시물에 달린 모든 댓글의 ID
    async fn find_comment_ids_by_post(&self, post_id: &str) -> AppResult<Vec<String>>;

    async fn update_comment(&self, id: &str, text: String) -> AppResult<Option<Comment>>;

    async fn delete_comment(&self, id: &str) -> AppResult<bool>;

    /// 게시물에 달린 댓글을 모두 삭제하고 삭제된 개수를 반환합니다.
    async fn delete_comments_by_post(&self, post_id: &str) -> AppResult<u64>;

    async fn find_like(&self, target: &LikeTarget, user_id: &str) -> AppResult<Option<Like>>;

    /// 같은 (대상, 사용자) 좋아요가 이미 있으면 `ConflictError`를 반환합니다.
    async fn create_like(&self, like: Like) -> AppResult<Like>;

    /// 대상에 달린 좋아요를 모두 삭제합니다.
    async fn delete_likes(&self, target: &LikeTarget) -> AppResult<u64>;

    /// 여러 댓글에 달린 좋아요를 한 번에 삭제합니다.
    async fn delete_likes_for_comments(&self, comment_ids: &[String]) -> AppResult<u64>;
}
