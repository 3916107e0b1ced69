//! # 게시물 서비스
//!
//! 게시물, 댓글, 좋아요를 관리합니다. 소유권 검사와 연쇄 삭제 순서는 여기서 결정됩니다.
//! 소유하지 않은 리소스에 대한 수정/삭제는 존재 여부를 드러내지 않도록 404로 응답합니다.
//! 경로로 들어온 ID는 모두 [`canonical_id`]로 정규화한 뒤 비교하고 저장합니다.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use crate::config::StoreConfig;
use crate::core::errors::{AppError, AppResult};
use crate::domain::dto::posts::{CommentResponse, LikeResponse, PostResponse};
use crate::domain::entities::posts::{split_hashtags, Comment, Like, LikeTarget, Post, PostChanges};
use crate::repositories::canonical_id;
use crate::repositories::posts::PostRepository;
use crate::utils::timeout::with_timeout;

pub const POST_NOT_FOUND: &str = "Post not found.";
pub const POST_NOT_OWNED: &str = "Post not found or you don't have access to delete this post";
pub const COMMENT_NOT_FOUND: &str = "Comment not found.";
pub const COMMENT_NOT_OWNED: &str =
    "Comment not found or you don't have access to update this comment";

/// 좋아요 결과
///
/// `created`가 false면 이미 존재하던 좋아요를 그대로 돌려준 것입니다.
#[derive(Debug)]
pub struct LikeOutcome {
    pub like: LikeResponse,
    pub created: bool,
}

pub struct PostService {
    post_repo: Arc<dyn PostRepository>,
    timeout: Duration,
}

impl PostService {
    pub fn new(post_repo: Arc<dyn PostRepository>, store: StoreConfig) -> Self {
        Self {
            post_repo,
            timeout: store.operation_timeout,
        }
    }

    async fn guarded<T, F>(&self, operation: &str, fut: F) -> AppResult<T>
    where
        F: Future<Output = AppResult<T>>,
    {
        with_timeout(self.timeout, operation, fut).await
    }

    async fn require_post(&self, post_id: &str) -> AppResult<Post> {
        self.guarded("posts.find", self.post_repo.find_post(post_id))
            .await?
            .ok_or_else(|| AppError::NotFound(POST_NOT_FOUND.to_string()))
    }

    async fn require_owned_comment(&self, user_id: &str, comment_id: &str) -> AppResult<Comment> {
        self.guarded("comments.find", self.post_repo.find_comment(comment_id))
            .await?
            .filter(|comment| comment.is_owned_by(user_id))
            .ok_or_else(|| AppError::NotFound(COMMENT_NOT_OWNED.to_string()))
    }

    pub async fn create_post(&self, user_id: &str, changes: PostChanges) -> AppResult<PostResponse> {
        let post = Post::new(
            user_id.to_string(),
            changes.text,
            changes.image_url,
            changes.hashtags,
        );

        let created = self
            .guarded("posts.create", self.post_repo.create_post(post))
            .await?;

        log::info!("📝 게시물 생성: {}", created.id_string().unwrap_or_default());

        Ok(PostResponse::from(created))
    }

    /// 작성자만 수정할 수 있습니다. 이미지 URL이 없으면 기존 값을 유지합니다.
    pub async fn update_post(&self, user_id: &str, post_id: &str, changes: PostChanges) -> AppResult<PostResponse> {
        let post_id = canonical_id(post_id)?;
        let post_id = post_id.as_str();
        let post = self.require_post(post_id).await?;
        if !post.is_owned_by(user_id) {
            return Err(AppError::NotFound(POST_NOT_FOUND.to_string()));
        }

        let updated = self
            .guarded("posts.update", self.post_repo.update_post(post_id, changes))
            .await?
            .ok_or_else(|| AppError::NotFound(POST_NOT_FOUND.to_string()))?;

        Ok(PostResponse::from(updated))
    }

    /// 게시물과 그 댓글, 게시물과 댓글에 달린 좋아요를 모두 삭제합니다.
    pub async fn delete_post(&self, user_id: &str, post_id: &str) -> AppResult<()> {
        let post_id = canonical_id(post_id)?;
        let post_id = post_id.as_str();
        let owned = self
            .guarded("posts.find", self.post_repo.find_post(post_id))
            .await?
            .is_some_and(|post| post.is_owned_by(user_id));
        if !owned {
            return Err(AppError::NotFound(POST_NOT_OWNED.to_string()));
        }

        let comment_ids = self
            .guarded("comments.find_ids", self.post_repo.find_comment_ids_by_post(post_id))
            .await?;

        self.guarded(
            "likes.delete_for_comments",
            self.post_repo.delete_likes_for_comments(&comment_ids),
        )
        .await?;

        self.guarded(
            "comments.delete_by_post",
            self.post_repo.delete_comments_by_post(post_id),
        )
        .await?;

        let post_target = LikeTarget::Post(post_id.to_string());
        self.guarded("likes.delete", self.post_repo.delete_likes(&post_target))
            .await?;

        self.guarded("posts.delete", self.post_repo.delete_post(post_id))
            .await?;

        log::info!("🗑️ 게시물 삭제: {} (댓글 {}개)", post_id, comment_ids.len());

        Ok(())
    }

    /// 쉼표로 구분된 태그 중 하나라도 가진 게시물
    pub async fn search_by_tags(&self, raw_tags: &str) -> AppResult<Vec<PostResponse>> {
        let tags = split_hashtags(raw_tags);
        if tags.is_empty() {
            return Ok(Vec::new());
        }

        let posts = self
            .guarded("posts.find_by_tags", self.post_repo.find_posts_by_tags(&tags))
            .await?;

        Ok(posts.into_iter().map(PostResponse::from).collect())
    }

    /// 본문 부분 일치 검색 (대소문자 무시)
    pub async fn search_by_text(&self, text: &str) -> AppResult<Vec<PostResponse>> {
        let posts = self
            .guarded("posts.search_by_text", self.post_repo.search_posts_by_text(text))
            .await?;

        Ok(posts.into_iter().map(PostResponse::from).collect())
    }

    /// 댓글을 작성합니다. `parent`는 같은 게시물에 달린 댓글이어야 합니다.
    pub async fn add_comment(
        &self,
        user_id: &str,
        post_id: &str,
        text: String,
        parent: Option<String>,
    ) -> AppResult<CommentResponse> {
        let post_id = canonical_id(post_id)?;
        let post_id = post_id.as_str();
        let parent = parent.as_deref().map(canonical_id).transpose()?;

        self.require_post(post_id).await?;

        if let Some(parent_id) = parent.as_deref() {
            let parent_on_post = self
                .guarded("comments.find", self.post_repo.find_comment(parent_id))
                .await?
                .is_some_and(|comment| comment.post == post_id);
            if !parent_on_post {
                return Err(AppError::NotFound(COMMENT_NOT_FOUND.to_string()));
            }
        }

        let comment = Comment::new(post_id.to_string(), user_id.to_string(), text, parent);
        let created = self
            .guarded("comments.create", self.post_repo.create_comment(comment))
            .await?;

        Ok(CommentResponse::from(created))
    }

    async fn find_like(&self, user_id: &str, target: &LikeTarget) -> AppResult<Option<LikeOutcome>> {
        let existing = self
            .guarded("likes.find", self.post_repo.find_like(target, user_id))
            .await?;

        Ok(existing.map(|like| LikeOutcome {
            like: LikeResponse::from(like),
            created: false,
        }))
    }

    async fn like(&self, user_id: &str, target: LikeTarget) -> AppResult<LikeOutcome> {
        if let Some(existing) = self.find_like(user_id, &target).await? {
            return Ok(existing);
        }

        let result = self
            .guarded(
                "likes.create",
                self.post_repo.create_like(Like::new(target.clone(), user_id.to_string())),
            )
            .await;

        match result {
            Ok(created) => Ok(LikeOutcome {
                like: LikeResponse::from(created),
                created: true,
            }),
            // 동시 요청이 먼저 저장했으면 그 좋아요를 돌려줍니다
            Err(AppError::ConflictError(_)) => {
                log::debug!("좋아요 중복 저장 감지: {} {:?}", user_id, target);
                self.find_like(user_id, &target).await?.ok_or_else(|| {
                    AppError::TransientError("좋아요 상태를 확인하지 못했습니다".to_string())
                })
            }
            Err(e) => Err(e),
        }
    }

    /// 게시물 좋아요. 이미 눌렀으면 기존 좋아요를 반환합니다.
    pub async fn like_post(&self, user_id: &str, post_id: &str) -> AppResult<LikeOutcome> {
        let post_id = canonical_id(post_id)?;
        self.require_post(&post_id).await?;

        self.like(user_id, LikeTarget::Post(post_id)).await
    }

    /// 댓글 좋아요. 이미 눌렀으면 기존 좋아요를 반환합니다.
    pub async fn like_comment(&self, user_id: &str, comment_id: &str) -> AppResult<LikeOutcome> {
        let comment_id = canonical_id(comment_id)?;
        self.guarded("comments.find", self.post_repo.find_comment(&comment_id))
            .await?
            .ok_or_else(|| AppError::NotFound(COMMENT_NOT_FOUND.to_string()))?;

        self.like(user_id, LikeTarget::Comment(comment_id)).await
    }

    /// 작성자만 댓글을 수정할 수 있습니다.
    pub async fn update_comment(&self, user_id: &str, comment_id: &str, text: String) -> AppResult<CommentResponse> {
        let comment_id = canonical_id(comment_id)?;
        let comment_id = comment_id.as_str();
        self.require_owned_comment(user_id, comment_id).await?;

        let updated = self
            .guarded("comments.update", self.post_repo.update_comment(comment_id, text))
            .await?
            .ok_or_else(|| AppError::NotFound(COMMENT_NOT_OWNED.to_string()))?;

        Ok(CommentResponse::from(updated))
    }

    /// 작성자만 댓글을 삭제할 수 있으며, 댓글에 달린 좋아요도 함께 삭제됩니다.
    pub async fn delete_comment(&self, user_id: &str, comment_id: &str) -> AppResult<()> {
        let comment_id = canonical_id(comment_id)?;
        let comment_id = comment_id.as_str();
        self.require_owned_comment(user_id, comment_id).await?;

        let target = LikeTarget::Comment(comment_id.to_string());
        self.guarded("likes.delete", self.post_repo.delete_likes(&target))
            .await?;

        self.guarded("comments.delete", self.post_repo.delete_comment(comment_id))
            .await?;

        Ok(())
    }

    /// 조회수를 1 증가시킵니다.
    pub async fn increase_view(&self, post_id: &str) -> AppResult<PostResponse> {
        let post_id = canonical_id(post_id)?;
        let updated = self
            .guarded("posts.increment_view", self.post_repo.increment_view_count(&post_id))
            .await?
            .ok_or_else(|| AppError::NotFound(POST_NOT_FOUND.to_string()))?;

        Ok(PostResponse::from(updated))
    }
}
