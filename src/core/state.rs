//! # Application State
//!
//! 핸들러와 인증 게이트가 사용하는 서비스 묶음입니다.
//! `web::Data<AppState>`로 등록되어 요청마다 명시적으로 조회됩니다.

use std::sync::Arc;

use crate::config::{JwtConfig, StoreConfig};
use crate::repositories::posts::{InMemoryPostRepository, PostRepository};
use crate::repositories::users::{InMemoryUserRepository, UserRepository};
use crate::services::auth::TokenService;
use crate::services::posts::PostService;
use crate::services::users::UserService;

#[derive(Clone)]
pub struct AppState {
    pub users: Arc<UserService>,
    pub tokens: Arc<TokenService>,
    pub posts: Arc<PostService>,
}

impl AppState {
    /// 저장소 구현과 설정으로 서비스들을 조립합니다.
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        post_repo: Arc<dyn PostRepository>,
        jwt: &JwtConfig,
        store: StoreConfig,
        bcrypt_cost: u32,
    ) -> Self {
        Self {
            users: Arc::new(UserService::new(user_repo, store, bcrypt_cost)),
            tokens: Arc::new(TokenService::new(jwt)),
            posts: Arc::new(PostService::new(post_repo, store)),
        }
    }

    /// 인메모리 저장소로 조립합니다. 로컬 개발과 테스트에서 사용합니다.
    pub fn in_memory(jwt: &JwtConfig, bcrypt_cost: u32) -> Self {
        Self::new(
            Arc::new(InMemoryUserRepository::new()),
            Arc::new(InMemoryPostRepository::new()),
            jwt,
            StoreConfig::default(),
            bcrypt_cost,
        )
    }
}
