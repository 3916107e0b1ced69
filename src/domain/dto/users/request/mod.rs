//! 사용자 관련 요청 DTO

pub mod create_user;
pub mod auth_request;
pub mod update_user;
pub mod follow_request;

pub use create_user::{CreateUserRequest, NewUser, REQUIRED_FIELDS_MISSING};
pub use auth_request::LoginRequest;
pub use update_user::UpdateUserRequest;
pub use follow_request::{FollowRequest, UnfollowRequest, UserSearchQuery};
