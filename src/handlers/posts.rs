//! Post HTTP Handlers
//!
//! `/v1/post` 스코프의 게시물, 댓글, 좋아요 엔드포인트입니다.
use actix_web::{delete, get, post, put, web, HttpResponse};

use crate::core::errors::AppError;
use crate::core::state::AppState;
use crate::domain::dto::common::ApiResponse;
use crate::domain::dto::posts::{
    CreateCommentRequest, PostRequest, TagSearchQuery, TextSearchQuery, UpdateCommentRequest,
};
use crate::domain::models::auth::AuthenticatedUser;
use crate::utils::string_utils::validate_required_string;

const POST_FETCHED: &str = "Post fetched successfully";

/// 게시물 작성
///
/// # Endpoint
/// `POST /v1/post/createPost`
///
/// # Request Body
/// ```json
/// { "text": "hello", "hashtags": "rust,web", "imageUrl": "https://cdn/x.png" }
/// ```
#[post("/createPost")]
pub async fn create_post(
    state: web::Data<AppState>,
    principal: AuthenticatedUser,
    payload: web::Json<PostRequest>,
) -> Result<HttpResponse, AppError> {
    let changes = payload.into_inner().into_changes()?;

    let post = state.posts.create_post(principal.id(), changes).await?;

    Ok(HttpResponse::Created().json(ApiResponse::success(post, "Post created successfully")))
}

/// 게시물 수정 (작성자만)
///
/// `imageUrl`을 생략하면 기존 이미지가 유지됩니다.
#[put("/updatePost/{id}")]
pub async fn update_post(
    state: web::Data<AppState>,
    principal: AuthenticatedUser,
    path: web::Path<String>,
    payload: web::Json<PostRequest>,
) -> Result<HttpResponse, AppError> {
    let changes = payload.into_inner().into_changes()?;

    let post = state
        .posts
        .update_post(principal.id(), &path.into_inner(), changes)
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(post, "Post updated successfully")))
}

/// 게시물 삭제 (작성자만). 댓글과 좋아요도 함께 삭제됩니다.
#[delete("/deletePost/{id}")]
pub async fn delete_post(
    state: web::Data<AppState>,
    principal: AuthenticatedUser,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    state
        .posts
        .delete_post(principal.id(), &path.into_inner())
        .await?;

    Ok(HttpResponse::NoContent().finish())
}

/// 해시태그 검색
///
/// # Endpoint
/// `GET /v1/post/searchByTag?tags=rust,web`
#[get("/searchByTag")]
pub async fn search_by_tag(
    state: web::Data<AppState>,
    query: web::Query<TagSearchQuery>,
) -> Result<HttpResponse, AppError> {
    let tags = validate_required_string(query.tags.as_deref(), "tags")?;

    let posts = state.posts.search_by_tags(&tags).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(posts, POST_FETCHED)))
}

/// 본문 검색
#[get("/searchByText")]
pub async fn search_by_text(
    state: web::Data<AppState>,
    query: web::Query<TextSearchQuery>,
) -> Result<HttpResponse, AppError> {
    let text = validate_required_string(query.text.as_deref(), "text")?;

    let posts = state.posts.search_by_text(&text).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(posts, POST_FETCHED)))
}

/// 댓글 작성
///
/// # Endpoint
/// `POST /v1/post/postComment/{postId}`
#[post("/postComment/{id}")]
pub async fn post_comment(
    state: web::Data<AppState>,
    principal: AuthenticatedUser,
    path: web::Path<String>,
    payload: web::Json<CreateCommentRequest>,
) -> Result<HttpResponse, AppError> {
    let request = payload.into_inner();
    let text = validate_required_string(request.text.as_deref(), "text")?;

    let comment = state
        .posts
        .add_comment(principal.id(), &path.into_inner(), text, request.parent)
        .await?;

    Ok(HttpResponse::Created().json(ApiResponse::success(comment, "Comment added successfully")))
}

/// 게시물 좋아요
#[post("/postLike/{id}")]
pub async fn post_like(
    state: web::Data<AppState>,
    principal: AuthenticatedUser,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let outcome = state
        .posts
        .like_post(principal.id(), &path.into_inner())
        .await?;

    let message = if outcome.created {
        "Post liked successfully"
    } else {
        "Post already liked by the user"
    };

    Ok(HttpResponse::Created().json(ApiResponse::success(outcome.like, message)))
}

/// 댓글 좋아요
#[post("/commentLike/{id}")]
pub async fn comment_like(
    state: web::Data<AppState>,
    principal: AuthenticatedUser,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let outcome = state
        .posts
        .like_comment(principal.id(), &path.into_inner())
        .await?;

    let message = if outcome.created {
        "Comment liked successfully"
    } else {
        "Comment already liked by the user"
    };

    Ok(HttpResponse::Created().json(ApiResponse::success(outcome.like, message)))
}

/// 댓글 수정 (작성자만)
#[put("/updateComment/{id}")]
pub async fn update_comment(
    state: web::Data<AppState>,
    principal: AuthenticatedUser,
    path: web::Path<String>,
    payload: web::Json<UpdateCommentRequest>,
) -> Result<HttpResponse, AppError> {
    let text = validate_required_string(payload.text.as_deref(), "text")?;

    let comment = state
        .posts
        .update_comment(principal.id(), &path.into_inner(), text)
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(comment, "Comment updated successfully")))
}

/// 댓글 삭제 (작성자만)
#[delete("/deleteComment/{id}")]
pub async fn delete_comment(
    state: web::Data<AppState>,
    principal: AuthenticatedUser,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    state
        .posts
        .delete_comment(principal.id(), &path.into_inner())
        .await?;

    Ok(HttpResponse::NoContent().finish())
}

/// 조회수 증가
#[post("/increaseView/{id}")]
pub async fn increase_view(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let post = state.posts.increase_view(&path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(post, "View increased successfully")))
}
