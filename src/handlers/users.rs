//! User HTTP Handlers
//!
//! `/v1/user` 스코프의 사용자 관리 엔드포인트입니다. 모든 라우트는 인증 게이트 뒤에 있습니다.
//! 수정과 삭제는 본인 계정에 대해서만 허용됩니다.
use actix_web::{delete, get, post, put, web, HttpResponse};

use crate::core::errors::AppError;
use crate::core::state::AppState;
use crate::domain::dto::common::{ApiResponse, Empty};
use crate::domain::dto::users::{
    CreateUserRequest, FollowRequest, UnfollowRequest, UpdateUserRequest, UserSearchQuery,
};
use crate::domain::models::auth::AuthenticatedUser;
use crate::services::users::USER_EXISTS;
use crate::utils::string_utils::validate_required_string;

/// 다른 사용자의 계정에 접근
pub const NOT_OWN_ACCOUNT: &str = "You can only modify your own account";

fn ensure_self(principal: &AuthenticatedUser, user_id: &str) -> Result<(), AppError> {
    if principal.is_self(user_id) {
        Ok(())
    } else {
        log::warn!("권한 없음: {} 사용자가 {} 계정 변경 시도", principal.id(), user_id);
        Err(AppError::AuthorizationError(NOT_OWN_ACCOUNT.to_string()))
    }
}

/// 사용자 생성
///
/// # Endpoint
/// `POST /v1/user/createUser`
#[post("/createUser")]
pub async fn create_user(
    state: web::Data<AppState>,
    payload: web::Json<CreateUserRequest>,
) -> Result<HttpResponse, AppError> {
    let new_user = payload.into_inner().into_new_user()?;

    let user = state
        .users
        .create(new_user)
        .await
        .map_err(|err| err.conflict_as(USER_EXISTS))?;

    Ok(HttpResponse::Created().json(ApiResponse::success(user, "New User has been created")))
}

/// 사용자 정보 수정 (본인만)
///
/// # Endpoint
/// `PUT /v1/user/updateUser/{id}`
#[put("/updateUser/{id}")]
pub async fn update_user(
    state: web::Data<AppState>,
    principal: AuthenticatedUser,
    path: web::Path<String>,
    payload: web::Json<UpdateUserRequest>,
) -> Result<HttpResponse, AppError> {
    let user_id = path.into_inner();
    ensure_self(&principal, &user_id)?;

    let user = state.users.update(&user_id, payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(user, "User updated")))
}

/// 사용자 삭제 (본인만)
///
/// # Endpoint
/// `DELETE /v1/user/deleteUser/{id}`
#[delete("/deleteUser/{id}")]
pub async fn delete_user(
    state: web::Data<AppState>,
    principal: AuthenticatedUser,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let user_id = path.into_inner();
    ensure_self(&principal, &user_id)?;

    state.users.delete(&user_id).await?;

    Ok(HttpResponse::NoContent().finish())
}

/// 전체 사용자 목록
#[get("/allUsers")]
pub async fn all_users(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let users = state.users.list_all().await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(users, "Fetched all users")))
}

/// 이름으로 사용자 검색 (대소문자 무시, 부분 일치)
///
/// # Endpoint
/// `GET /v1/user/search?name=jo`
#[get("/search")]
pub async fn search_users(
    state: web::Data<AppState>,
    query: web::Query<UserSearchQuery>,
) -> Result<HttpResponse, AppError> {
    let name = validate_required_string(query.name.as_deref(), "name")?;

    let users = state.users.search_by_name(&name).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(users, "Searched successfully")))
}

/// 다른 사용자 팔로우
///
/// 이미 팔로우 중이어도 성공으로 응답합니다.
#[post("/follow")]
pub async fn follow(
    state: web::Data<AppState>,
    principal: AuthenticatedUser,
    payload: web::Json<FollowRequest>,
) -> Result<HttpResponse, AppError> {
    let target = validate_required_string(payload.user_id_to_follow.as_deref(), "userIdToFollow")?;

    state.users.add_follow(principal.id(), &target).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(Empty::default(), "Followed successfully")))
}

/// 언팔로우
#[post("/unfollow")]
pub async fn unfollow(
    state: web::Data<AppState>,
    principal: AuthenticatedUser,
    payload: web::Json<UnfollowRequest>,
) -> Result<HttpResponse, AppError> {
    let target =
        validate_required_string(payload.user_id_to_unfollow.as_deref(), "userIdToUnfollow")?;

    state.users.remove_follow(principal.id(), &target).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(Empty::default(), "Unfollowed successfully")))
}
