//! 인메모리 사용자 저장소
//!
//! 로컬 개발(`STORE_BACKEND=memory`)과 테스트에서 MongoDB 없이 동작하기 위한 구현입니다.
//! 잠금은 `.await` 지점을 넘어 유지되지 않습니다.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use mongodb::bson::{oid::ObjectId, DateTime};

use crate::core::errors::{AppError, AppResult, DUPLICATE_KEY};
use crate::domain::entities::users::{User, UserChanges};
use crate::repositories::users::UserRepository;
use crate::repositories::{parse_object_id, read_lock, write_lock};
use crate::utils::string_utils::contains_ignore_case;

#[derive(Default)]
pub struct InMemoryUserRepository {
    users: RwLock<HashMap<ObjectId, User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn email_taken(users: &HashMap<ObjectId, User>, email: &str, except: Option<ObjectId>) -> bool {
        users
            .values()
            .any(|user| user.email == email && user.id != except)
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_email(&self, email: &str, include_password_hash: bool) -> AppResult<Option<User>> {
        let users = read_lock(&self.users)?;

        Ok(users
            .values()
            .find(|user| user.email == email)
            .cloned()
            .map(|user| if include_password_hash { user } else { user.without_password() }))
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>> {
        let object_id = parse_object_id(id)?;
        let users = read_lock(&self.users)?;

        Ok(users.get(&object_id).cloned().map(User::without_password))
    }

    async fn find_all(&self) -> AppResult<Vec<User>> {
        let users = read_lock(&self.users)?;

        let mut all: Vec<User> = users.values().cloned().map(User::without_password).collect();
        all.sort_by_key(|user| user.created_at);

        Ok(all)
    }

    async fn search_by_name(&self, fragment: &str) -> AppResult<Vec<User>> {
        let users = read_lock(&self.users)?;

        let mut found: Vec<User> = users
            .values()
            .filter(|user| contains_ignore_case(&user.name, fragment))
            .cloned()
            .map(User::without_password)
            .collect();
        found.sort_by_key(|user| user.created_at);

        Ok(found)
    }

    async fn create(&self, mut user: User) -> AppResult<User> {
        let mut users = write_lock(&self.users)?;

        if Self::email_taken(&users, &user.email, None) {
            return Err(AppError::ConflictError(DUPLICATE_KEY.to_string()));
        }

        let id = ObjectId::new();
        user.id = Some(id);
        users.insert(id, user.clone());

        Ok(user.without_password())
    }

    async fn update(&self, id: &str, changes: UserChanges) -> AppResult<Option<User>> {
        let object_id = parse_object_id(id)?;
        let mut users = write_lock(&self.users)?;

        if let Some(email) = changes.email.as_deref() {
            if Self::email_taken(&users, email, Some(object_id)) {
                return Err(AppError::ConflictError(DUPLICATE_KEY.to_string()));
            }
        }

        let Some(user) = users.get_mut(&object_id) else {
            return Ok(None);
        };

        if let Some(name) = changes.name {
            user.name = name;
        }
        if let Some(email) = changes.email {
            user.email = email;
        }
        if let Some(mobile) = changes.mobile {
            user.mobile = mobile;
        }
        if let Some(password_hash) = changes.password_hash {
            user.password_hash = Some(password_hash);
        }
        user.updated_at = DateTime::now();

        Ok(Some(user.clone().without_password()))
    }

    async fn delete(&self, id: &str) -> AppResult<bool> {
        let object_id = parse_object_id(id)?;
        let mut users = write_lock(&self.users)?;

        Ok(users.remove(&object_id).is_some())
    }

    async fn add_follow(&self, follower_id: &str, followee_id: &str) -> AppResult<()> {
        let follower = parse_object_id(follower_id)?;
        let followee = parse_object_id(followee_id)?;
        let mut users = write_lock(&self.users)?;
        let now = DateTime::now();

        if let Some(user) = users.get_mut(&follower) {
            if !user.following.iter().any(|id| id == followee_id) {
                user.following.push(followee_id.to_string());
            }
            user.updated_at = now;
        }

        if let Some(user) = users.get_mut(&followee) {
            if !user.followers.iter().any(|id| id == follower_id) {
                user.followers.push(follower_id.to_string());
            }
            user.updated_at = now;
        }

        Ok(())
    }

    async fn remove_follow(&self, follower_id: &str, followee_id: &str) -> AppResult<()> {
        let follower = parse_object_id(follower_id)?;
        let followee = parse_object_id(followee_id)?;
        let mut users = write_lock(&self.users)?;
        let now = DateTime::now();

        if let Some(user) = users.get_mut(&follower) {
            user.following.retain(|id| id != followee_id);
            user.updated_at = now;
        }

        if let Some(user) = users.get_mut(&followee) {
            user.followers.retain(|id| id != follower_id);
            user.updated_at = now;
        }

        Ok(())
    }

    async fn remove_from_relations(&self, id: &str) -> AppResult<()> {
        let mut users = write_lock(&self.users)?;

        for user in users.values_mut() {
            user.followers.retain(|other| other != id);
            user.following.retain(|other| other != id);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(email: &str) -> User {
        User::new("Jo".to_string(), email.to_string(), "111".to_string(), "hash".to_string())
    }

    #[actix_web::test]
    async fn test_create_assigns_id_and_hides_hash() {
        let repo = InMemoryUserRepository::new();

        let created = repo.create(user("jo@x.com")).await.unwrap();

        assert!(created.id.is_some());
        assert!(created.password_hash.is_none());

        let with_hash = repo.find_by_email("jo@x.com", true).await.unwrap().unwrap();
        assert_eq!(with_hash.password_hash.as_deref(), Some("hash"));

        let without_hash = repo.find_by_email("jo@x.com", false).await.unwrap().unwrap();
        assert!(without_hash.password_hash.is_none());
    }

    #[actix_web::test]
    async fn test_duplicate_email_is_conflict() {
        let repo = InMemoryUserRepository::new();
        repo.create(user("jo@x.com")).await.unwrap();

        let result = repo.create(user("jo@x.com")).await;

        match result {
            Err(AppError::ConflictError(msg)) => assert_eq!(msg, DUPLICATE_KEY),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[actix_web::test]
    async fn test_follow_is_set_like() {
        let repo = InMemoryUserRepository::new();
        let a = repo.create(user("a@x.com")).await.unwrap().id_string().unwrap();
        let b = repo.create(user("b@x.com")).await.unwrap().id_string().unwrap();

        repo.add_follow(&a, &b).await.unwrap();
        repo.add_follow(&a, &b).await.unwrap();

        let a_user = repo.find_by_id(&a).await.unwrap().unwrap();
        let b_user = repo.find_by_id(&b).await.unwrap().unwrap();
        assert_eq!(a_user.following, vec![b.clone()]);
        assert_eq!(b_user.followers, vec![a.clone()]);

        repo.remove_follow(&a, &b).await.unwrap();
        repo.remove_follow(&a, &b).await.unwrap();

        let a_user = repo.find_by_id(&a).await.unwrap().unwrap();
        assert!(a_user.following.is_empty());
    }

    #[actix_web::test]
    async fn test_search_by_name_is_case_insensitive() {
        let repo = InMemoryUserRepository::new();
        let mut alice = user("alice@x.com");
        alice.name = "Alice Kim".to_string();
        repo.create(alice).await.unwrap();
        repo.create(user("jo@x.com")).await.unwrap();

        let found = repo.search_by_name("alice").await.unwrap();

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].email, "alice@x.com");
    }
}
