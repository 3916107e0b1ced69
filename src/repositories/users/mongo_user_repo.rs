//! MongoDB 사용자 저장소
//!
//! `users` 컬렉션을 사용하며, 시작 시 [`create_indexes`](MongoUserRepository::create_indexes)로
//! 이메일 unique 인덱스를 보장합니다. 동시 회원가입 경합은 이 인덱스에서 막히고,
//! duplicate key 에러는 `ConflictError`로 변환됩니다.

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    bson::{doc, DateTime, Document},
    options::{IndexOptions, ReturnDocument},
    Collection, IndexModel,
};

use crate::core::errors::{AppError, AppResult};
use crate::db::Database;
use crate::domain::entities::users::{User, UserChanges};
use crate::repositories::parse_object_id;
use crate::repositories::users::UserRepository;
use crate::utils::string_utils::escape_search_pattern;

const COLLECTION: &str = "users";

pub struct MongoUserRepository {
    collection: Collection<User>,
}

impl MongoUserRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.get_database().collection::<User>(COLLECTION),
        }
    }

    /// 기본 조회 프로젝션 (비밀번호 해시 제외)
    fn public_projection() -> Document {
        doc! { "password_hash": 0 }
    }

    /// 인덱스를 생성합니다.
    pub async fn create_indexes(&self) -> AppResult<()> {
        // 이메일 유니크 인덱스
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("email_unique".to_string())
                    .build(),
            )
            .build();

        // 이름 검색용 인덱스
        let name_index = IndexModel::builder()
            .keys(doc! { "name": 1 })
            .options(IndexOptions::builder().name("name_asc".to_string()).build())
            .build();

        self.collection
            .create_indexes([email_index, name_index])
            .await?;

        Ok(())
    }
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    async fn find_by_email(&self, email: &str, include_password_hash: bool) -> AppResult<Option<User>> {
        let query = self.collection.find_one(doc! { "email": email });

        let user = if include_password_hash {
            query.await?
        } else {
            query.projection(Self::public_projection()).await?
        };

        Ok(user)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>> {
        let object_id = parse_object_id(id)?;

        let user = self
            .collection
            .find_one(doc! { "_id": object_id })
            .projection(Self::public_projection())
            .await?;

        Ok(user)
    }

    async fn find_all(&self) -> AppResult<Vec<User>> {
        let cursor = self
            .collection
            .find(doc! {})
            .projection(Self::public_projection())
            .sort(doc! { "created_at": 1 })
            .await?;

        Ok(cursor.try_collect().await?)
    }

    async fn search_by_name(&self, fragment: &str) -> AppResult<Vec<User>> {
        let filter = doc! {
            "name": { "$regex": escape_search_pattern(fragment), "$options": "i" }
        };

        let cursor = self
            .collection
            .find(filter)
            .projection(Self::public_projection())
            .await?;

        Ok(cursor.try_collect().await?)
    }

    async fn create(&self, mut user: User) -> AppResult<User> {
        let result = self.collection.insert_one(&user).await?;

        user.id = Some(result.inserted_id.as_object_id().ok_or_else(|| {
            AppError::InternalError("inserted user id is not an ObjectId".to_string())
        })?);

        Ok(user.without_password())
    }

    async fn update(&self, id: &str, changes: UserChanges) -> AppResult<Option<User>> {
        let object_id = parse_object_id(id)?;

        let mut set = doc! { "updated_at": DateTime::now() };
        if let Some(name) = changes.name {
            set.insert("name", name);
        }
        if let Some(email) = changes.email {
            set.insert("email", email);
        }
        if let Some(mobile) = changes.mobile {
            set.insert("mobile", mobile);
        }
        if let Some(password_hash) = changes.password_hash {
            set.insert("password_hash", password_hash);
        }

        let updated = self
            .collection
            .find_one_and_update(doc! { "_id": object_id }, doc! { "$set": set })
            .return_document(ReturnDocument::After)
            .projection(Self::public_projection())
            .await?;

        Ok(updated)
    }

    async fn delete(&self, id: &str) -> AppResult<bool> {
        let object_id = parse_object_id(id)?;

        let result = self.collection.delete_one(doc! { "_id": object_id }).await?;

        Ok(result.deleted_count > 0)
    }

    async fn add_follow(&self, follower_id: &str, followee_id: &str) -> AppResult<()> {
        let follower = parse_object_id(follower_id)?;
        let followee = parse_object_id(followee_id)?;
        let now = DateTime::now();

        self.collection
            .update_one(
                doc! { "_id": follower },
                doc! {
                    "$addToSet": { "following": followee_id },
                    "$set": { "updated_at": now },
                },
            )
            .await?;

        self.collection
            .update_one(
                doc! { "_id": followee },
                doc! {
                    "$addToSet": { "followers": follower_id },
                    "$set": { "updated_at": now },
                },
            )
            .await?;

        Ok(())
    }

    async fn remove_follow(&self, follower_id: &str, followee_id: &str) -> AppResult<()> {
        let follower = parse_object_id(follower_id)?;
        let followee = parse_object_id(followee_id)?;
        let now = DateTime::now();

        // $pull은 중복으로 저장된 값까지 모두 제거합니다.
        self.collection
            .update_one(
                doc! { "_id": follower },
                doc! {
                    "$pull": { "following": followee_id },
                    "$set": { "updated_at": now },
                },
            )
            .await?;

        self.collection
            .update_one(
                doc! { "_id": followee },
                doc! {
                    "$pull": { "followers": follower_id },
                    "$set": { "updated_at": now },
                },
            )
            .await?;

        Ok(())
    }

    async fn remove_from_relations(&self, id: &str) -> AppResult<()> {
        self.collection
            .update_many(
                doc! { "$or": [ { "followers": id }, { "following": id } ] },
                doc! { "$pull": { "followers": id, "following": id } },
            )
            .await?;

        Ok(())
    }
}
