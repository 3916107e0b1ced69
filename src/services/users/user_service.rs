//! # 사용자 서비스 (Credential Store)
//!
//! 사용자 레코드의 생명주기를 담당합니다.
//!
//! - 비밀번호 해싱은 저장 직전에 이 서비스에서만 수행합니다.
//! - 모든 저장소 호출은 [`with_timeout`]으로 제한 시간을 가집니다.
//! - 외부로 나가는 값은 항상 [`UserResponse`]이며 해시를 포함하지 않습니다.

use std::future::Future;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::config::StoreConfig;
use crate::core::errors::{AppError, AppResult, ErrorContext};
use crate::domain::dto::users::{NewUser, UpdateUserRequest, UserResponse};
use crate::domain::entities::users::{User, UserChanges};
use crate::repositories::canonical_id;
use crate::repositories::users::UserRepository;
use crate::utils::timeout::with_timeout;
use validator::Validate;

/// 존재하지 않는 사용자
pub const USER_NOT_FOUND: &str = "User not found.";
/// 로그인 시 이메일이 없는 경우
pub const UNKNOWN_EMAIL: &str = "User doesn't exist with provided email.";
/// 로그인 시 비밀번호가 틀린 경우
pub const INVALID_CREDENTIALS: &str =
    "Invalid email or password. Please try again with the correct credentials.";
/// 회원가입 시 이메일 중복
pub const ACCOUNT_EXISTS: &str = "It seems you have already an account, Please login.";
/// 관리용 생성이나 수정 시 다른 사용자와 이메일 중복
pub const USER_EXISTS: &str = "It seems user exist with same details.";

pub struct UserService {
    user_repo: Arc<dyn UserRepository>,
    timeout: Duration,
    bcrypt_cost: u32,
}

impl UserService {
    pub fn new(user_repo: Arc<dyn UserRepository>, store: StoreConfig, bcrypt_cost: u32) -> Self {
        Self {
            user_repo,
            timeout: store.operation_timeout,
            bcrypt_cost,
        }
    }

    async fn guarded<T, F>(&self, operation: &str, fut: F) -> AppResult<T>
    where
        F: Future<Output = AppResult<T>>,
    {
        with_timeout(self.timeout, operation, fut).await
    }

    fn hash_password(&self, password: &str) -> AppResult<String> {
        let hash_start = Instant::now();
        let password_hash = bcrypt::hash(password, self.bcrypt_cost).context("비밀번호 해싱 실패")?;
        log::debug!("Password hashing took: {:?}", hash_start.elapsed());

        Ok(password_hash)
    }

    /// 새 사용자를 생성합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ConflictError` - 같은 이메일의 사용자가 이미 존재
    pub async fn create(&self, input: NewUser) -> AppResult<UserResponse> {
        let existing = self
            .guarded("users.find_by_email", self.user_repo.find_by_email(&input.email, false))
            .await?;
        if existing.is_some() {
            return Err(AppError::ConflictError(ACCOUNT_EXISTS.to_string()));
        }

        let password_hash = self.hash_password(&input.password)?;
        let user = User::new(input.name, input.email, input.mobile, password_hash);

        // 조회와 저장 사이에 같은 이메일이 먼저 들어오면 유니크 인덱스가 막습니다
        let created = self
            .guarded("users.create", self.user_repo.create(user))
            .await
            .map_err(|e| e.conflict_as(ACCOUNT_EXISTS))?;

        log::info!("👤 새 사용자 등록: {}", created.id_string().unwrap_or_default());

        Ok(UserResponse::from(created))
    }

    /// 이메일로 사용자를 조회합니다. 해시는 명시적으로 요청한 경우에만 포함됩니다.
    pub async fn find_by_email(&self, email: &str, include_password_hash: bool) -> AppResult<Option<User>> {
        self.guarded(
            "users.find_by_email",
            self.user_repo.find_by_email(email, include_password_hash),
        )
        .await
    }

    /// ID로 사용자를 조회합니다.
    pub async fn find_by_id(&self, id: &str) -> AppResult<Option<UserResponse>> {
        let user = self
            .guarded("users.find_by_id", self.user_repo.find_by_id(id))
            .await?;

        Ok(user.map(UserResponse::from))
    }

    /// 사용자 정보를 부분 수정합니다.
    ///
    /// 비밀번호가 주어지면 다시 해싱합니다. 다른 사용자가 쓰는 이메일로 바꾸면 `ConflictError`입니다.
    pub async fn update(&self, id: &str, request: UpdateUserRequest) -> AppResult<UserResponse> {
        let id = canonical_id(id)?;
        let id = id.as_str();
        let request = request.cleaned();
        request
            .validate()
            .map_err(|e| AppError::ValidationError(e.to_string()))?;

        if let Some(email) = request.email.as_deref() {
            let owner = self
                .guarded("users.find_by_email", self.user_repo.find_by_email(email, false))
                .await?;
            if owner.is_some_and(|owner| owner.id_string().as_deref() != Some(id)) {
                return Err(AppError::ConflictError(USER_EXISTS.to_string()));
            }
        }

        let password_hash = match request.password.as_deref() {
            Some(password) => Some(self.hash_password(password)?),
            None => None,
        };

        let changes = UserChanges {
            name: request.name,
            email: request.email,
            mobile: request.mobile,
            password_hash,
        };

        // 바뀔 필드가 없으면 쓰기 없이 현재 상태를 반환
        if changes.is_empty() {
            return self
                .find_by_id(id)
                .await?
                .ok_or_else(|| AppError::NotFound(USER_NOT_FOUND.to_string()));
        }

        let updated = self
            .guarded("users.update", self.user_repo.update(id, changes))
            .await
            .map_err(|e| e.conflict_as(USER_EXISTS))?
            .ok_or_else(|| AppError::NotFound(USER_NOT_FOUND.to_string()))?;

        Ok(UserResponse::from(updated))
    }

    /// 사용자를 삭제하고 다른 사용자들의 팔로우 목록에서도 제거합니다.
    pub async fn delete(&self, id: &str) -> AppResult<()> {
        let id = canonical_id(id)?;
        let id = id.as_str();
        let deleted = self
            .guarded("users.delete", self.user_repo.delete(id))
            .await?;

        if !deleted {
            return Err(AppError::NotFound(USER_NOT_FOUND.to_string()));
        }

        self.guarded(
            "users.remove_from_relations",
            self.user_repo.remove_from_relations(id),
        )
        .await?;

        log::info!("🗑️ 사용자 삭제: {}", id);

        Ok(())
    }

    async fn ensure_pair_exists(&self, follower_id: &str, followee_id: &str) -> AppResult<()> {
        for id in [follower_id, followee_id] {
            let exists = self
                .guarded("users.find_by_id", self.user_repo.find_by_id(id))
                .await?
                .is_some();
            if !exists {
                return Err(AppError::NotFound(USER_NOT_FOUND.to_string()));
            }
        }

        Ok(())
    }

    /// 팔로우 관계를 추가합니다. 이미 팔로우 중이면 아무것도 바꾸지 않습니다.
    pub async fn add_follow(&self, follower_id: &str, followee_id: &str) -> AppResult<()> {
        let (follower_id, followee_id) = (canonical_id(follower_id)?, canonical_id(followee_id)?);
        let (follower_id, followee_id) = (follower_id.as_str(), followee_id.as_str());
        if follower_id == followee_id {
            return Err(AppError::ValidationError("You cannot follow yourself".to_string()));
        }

        self.ensure_pair_exists(follower_id, followee_id).await?;

        self.guarded(
            "users.add_follow",
            self.user_repo.add_follow(follower_id, followee_id),
        )
        .await?;

        log::info!("➕ {} → {} 팔로우", follower_id, followee_id);

        Ok(())
    }

    /// 팔로우 관계를 제거합니다. 관계가 없으면 아무것도 바꾸지 않습니다.
    pub async fn remove_follow(&self, follower_id: &str, followee_id: &str) -> AppResult<()> {
        let (follower_id, followee_id) = (canonical_id(follower_id)?, canonical_id(followee_id)?);
        let (follower_id, followee_id) = (follower_id.as_str(), followee_id.as_str());
        self.ensure_pair_exists(follower_id, followee_id).await?;

        self.guarded(
            "users.remove_follow",
            self.user_repo.remove_follow(follower_id, followee_id),
        )
        .await?;

        log::info!("➖ {} → {} 언팔로우", follower_id, followee_id);

        Ok(())
    }

    /// 이메일과 비밀번호를 검증하고 사용자(해시 제외)를 반환합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - 이메일이 없거나 비밀번호 불일치
    pub async fn verify_credentials(&self, email: &str, password: &str) -> AppResult<User> {
        let start_time = Instant::now();

        let user = self
            .find_by_email(email, true)
            .await?
            .ok_or_else(|| AppError::ValidationError(UNKNOWN_EMAIL.to_string()))?;

        let password_hash = user
            .password_hash
            .as_deref()
            .ok_or_else(|| AppError::InternalError("비밀번호 해시가 없습니다".to_string()))?;

        let is_valid = bcrypt::verify(password, password_hash).context("비밀번호 검증 실패")?;

        log::debug!("Password verification took: {:?}", start_time.elapsed());

        if !is_valid {
            log::warn!("🔒 로그인 실패 (비밀번호 불일치)");
            return Err(AppError::ValidationError(INVALID_CREDENTIALS.to_string()));
        }

        Ok(user.without_password())
    }

    /// 전체 사용자 목록
    pub async fn list_all(&self) -> AppResult<Vec<UserResponse>> {
        let users = self
            .guarded("users.find_all", self.user_repo.find_all())
            .await?;

        Ok(users.into_iter().map(UserResponse::from).collect())
    }

    /// 이름으로 사용자 검색 (대소문자 무시, 부분 일치)
    pub async fn search_by_name(&self, fragment: &str) -> AppResult<Vec<UserResponse>> {
        let users = self
            .guarded("users.search_by_name", self.user_repo.search_by_name(fragment))
            .await?;

        Ok(users.into_iter().map(UserResponse::from).collect())
    }
}
