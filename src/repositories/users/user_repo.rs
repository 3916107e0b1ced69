//! 사용자 저장소 인터페이스

use async_trait::async_trait;

use crate::core::errors::AppResult;
use crate::domain::entities::users::{User, UserChanges};

/// 사용자(Identity) 레코드 저장소
///
/// 모든 조회는 기본적으로 `password_hash`를 제외하고 반환합니다.
/// 해시가 필요한 경로는 [`find_by_email`](UserRepository::find_by_email)에
/// `include_password_hash = true`를 명시해야 합니다.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// 이메일로 사용자를 조회합니다.
    async fn find_by_email(&self, email: &str, include_password_hash: bool) -> AppResult<Option<User>>;

    /// ID로 사용자를 조회합니다. 잘못된 ID 형식은 `ValidationError`입니다.
    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>>;

    /// 전체 사용자 목록
    async fn find_all(&self) -> AppResult<Vec<User>>;

    /// 이름에 주어진 문자열을 포함하는 사용자 (대소문자 무시)
    async fn search_by_name(&self, fragment: &str) -> AppResult<Vec<User>>;

    /// 사용자를 저장하고 ID가 부여된 사용자를 반환합니다.
    ///
    /// 같은 이메일이 이미 있으면 `ConflictError`입니다.
    async fn create(&self, user: User) -> AppResult<User>;

    /// 부분 수정 후 수정된 사용자를 반환합니다. 대상이 없으면 `None`입니다.
    async fn update(&self, id: &str, changes: UserChanges) -> AppResult<Option<User>>;

    /// 삭제 여부를 반환합니다.
    async fn delete(&self, id: &str) -> AppResult<bool>;

    /// `follower.following`에 `followee`를, `followee.followers`에 `follower`를 추가합니다.
    /// 이미 있으면 아무것도 바꾸지 않습니다.
    async fn add_follow(&self, follower_id: &str, followee_id: &str) -> AppResult<()>;

    /// 팔로우 관계를 양쪽에서 제거합니다. 관계가 없으면 아무것도 바꾸지 않습니다.
    async fn remove_follow(&self, follower_id: &str, followee_id: &str) -> AppResult<()>;

    /// 다른 모든 사용자의 팔로우 목록에서 주어진 ID를 제거합니다.
    async fn remove_from_relations(&self, id: &str) -> AppResult<()>;
}
