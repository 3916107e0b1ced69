//! Authentication HTTP Handlers
//!
//! 회원가입, 로그인, 현재 사용자 조회 엔드포인트입니다.
//! 로그인에 성공하면 액세스 토큰이 JSON 본문으로 전달되며, 이후 요청은
//! `Authorization: Bearer <token>` 헤더로 토큰을 제시합니다.
//!
//! # Endpoints
//!
//! - `POST /v1/auth/register` - 회원가입
//! - `POST /v1/auth/login` - 이메일/비밀번호 로그인
//! - `GET /v1/auth/me` - 현재 사용자 (인증 필요)
use actix_web::{post, web, HttpResponse};

use crate::core::errors::AppError;
use crate::core::state::AppState;
use crate::domain::dto::common::ApiResponse;
use crate::domain::dto::users::{CreateUserRequest, LoginRequest, LoginResponse, UserResponse};
use crate::domain::models::auth::AuthenticatedUser;

/// 이메일 또는 비밀번호 누락
pub const MISSING_CREDENTIALS: &str = "You are missing either email or password.";

/// 회원가입 핸들러
///
/// # Endpoint
/// `POST /v1/auth/register`
///
/// # Request Body
/// ```json
/// { "name": "Jo", "email": "jo@x.com", "mobile": "111", "password": "secret1" }
/// ```
///
/// # Errors
///
/// * `400` - 필수 필드 누락, 6자 미만 비밀번호, 이미 가입된 이메일
#[post("/register")]
pub async fn register(
    state: web::Data<AppState>,
    payload: web::Json<CreateUserRequest>,
) -> Result<HttpResponse, AppError> {
    let new_user = payload.into_inner().into_new_user()?;

    let user = state.users.create(new_user).await?;

    Ok(HttpResponse::Created().json(ApiResponse::success(
        user,
        "Thank you for registering with us.",
    )))
}

/// 로컬 로그인 핸들러
///
/// 자격 증명을 확인한 뒤 7일짜리 세션 토큰을 발급합니다.
///
/// # Endpoint
/// `POST /v1/auth/login`
///
/// # Response
/// ```json
/// { "status": "success", "accessToken": "eyJ...", "message": "You have successfully logged in." }
/// ```
#[post("/login")]
pub async fn login(
    state: web::Data<AppState>,
    payload: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    let (email, password) = payload
        .credentials()
        .ok_or_else(|| AppError::ValidationError(MISSING_CREDENTIALS.to_string()))?;

    let user = state.users.verify_credentials(email, password).await?;

    let user_id = user
        .id_string()
        .ok_or_else(|| AppError::InternalError("stored user has no id".to_string()))?;

    let access_token = state.tokens.issue(&user_id)?;

    log::info!("🔑 로그인 성공 - 사용자 ID: {}", user_id);

    Ok(HttpResponse::Ok().json(LoginResponse::new(access_token)))
}

/// 현재 로그인한 사용자 정보
///
/// 인증 게이트가 붙여둔 사용자를 그대로 돌려주며 저장소를 다시 조회하지 않습니다.
///
/// # Endpoint
/// `GET /v1/auth/me`
pub async fn me(user: AuthenticatedUser) -> Result<HttpResponse, AppError> {
    let data: UserResponse = user.user;

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        data,
        "Logged in user data fetched successfully",
    )))
}
