//! MongoDB 게시물 저장소
//!
//! `posts`, `comments`, `likes` 세 컬렉션을 다룹니다.

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    bson::{doc, DateTime, Document},
    options::{IndexOptions, ReturnDocument},
    Collection, IndexModel,
};

use crate::core::errors::{AppError, AppResult};
use crate::db::Database;
use crate::domain::entities::posts::{Comment, Like, LikeTarget, Post, PostChanges};
use crate::repositories::parse_object_id;
use crate::repositories::posts::PostRepository;
use crate::utils::string_utils::escape_search_pattern;

pub struct MongoPostRepository {
    posts: Collection<Post>,
    comments: Collection<Comment>,
    likes: Collection<Like>,
}

impl MongoPostRepository {
    pub fn new(db: &Database) -> Self {
        let database = db.get_database();

        Self {
            posts: database.collection::<Post>("posts"),
            comments: database.collection::<Comment>("comments"),
            likes: database.collection::<Like>("likes"),
        }
    }

    fn like_filter(target: &LikeTarget) -> Document {
        match target {
            LikeTarget::Post(id) => doc! { "post": id.as_str() },
            LikeTarget::Comment(id) => doc! { "comment": id.as_str() },
        }
    }

    /// 검색과 연쇄 삭제에 쓰이는 인덱스, 좋아요 중복을 막는 유니크 인덱스를 생성합니다.
    pub async fn create_indexes(&self) -> AppResult<()> {
        let hashtags_index = IndexModel::builder()
            .keys(doc! { "hashtags": 1 })
            .options(IndexOptions::builder().name("hashtags_asc".to_string()).build())
            .build();

        let comment_post_index = IndexModel::builder()
            .keys(doc! { "post": 1 })
            .options(IndexOptions::builder().name("post_asc".to_string()).build())
            .build();

        // 좋아요는 post 또는 comment 중 하나만 가지므로 필드가 있는 문서만 유니크 검사
        let like_post_index = IndexModel::builder()
            .keys(doc! { "post": 1, "user": 1 })
            .options(
                IndexOptions::builder()
                    .name("post_user_unique".to_string())
                    .unique(true)
                    .partial_filter_expression(doc! { "post": { "$exists": true } })
                    .build(),
            )
            .build();

        let like_comment_index = IndexModel::builder()
            .keys(doc! { "comment": 1, "user": 1 })
            .options(
                IndexOptions::builder()
                    .name("comment_user_unique".to_string())
                    .unique(true)
                    .partial_filter_expression(doc! { "comment": { "$exists": true } })
                    .build(),
            )
            .build();

        self.posts.create_indexes([hashtags_index]).await?;
        self.comments.create_indexes([comment_post_index]).await?;
        self.likes
            .create_indexes([like_post_index, like_comment_index])
            .await?;

        Ok(())
    }
}

fn inserted_id(result: &mongodb::results::InsertOneResult) -> AppResult<mongodb::bson::oid::ObjectId> {
    result
        .inserted_id
        .as_object_id()
        .ok_or_else(|| AppError::InternalError("inserted id is not an ObjectId".to_string()))
}

#[async_trait]
impl PostRepository for MongoPostRepository {
    async fn create_post(&self, mut post: Post) -> AppResult<Post> {
        let result = self.posts.insert_one(&post).await?;
        post.id = Some(inserted_id(&result)?);

        Ok(post)
    }

    async fn find_post(&self, id: &str) -> AppResult<Option<Post>> {
        let object_id = parse_object_id(id)?;

        Ok(self.posts.find_one(doc! { "_id": object_id }).await?)
    }

    async fn update_post(&self, id: &str, changes: PostChanges) -> AppResult<Option<Post>> {
        let object_id = parse_object_id(id)?;

        let mut set = doc! {
            "text": changes.text,
            "hashtags": changes.hashtags,
            "updated_at": DateTime::now(),
        };
        if let Some(image_url) = changes.image_url {
            set.insert("image_url", image_url);
        }

        let updated = self
            .posts
            .find_one_and_update(doc! { "_id": object_id }, doc! { "$set": set })
            .return_document(ReturnDocument::After)
            .await?;

        Ok(updated)
    }

    async fn delete_post(&self, id: &str) -> AppResult<bool> {
        let object_id = parse_object_id(id)?;

        let result = self.posts.delete_one(doc! { "_id": object_id }).await?;

        Ok(result.deleted_count > 0)
    }

    async fn find_posts_by_tags(&self, tags: &[String]) -> AppResult<Vec<Post>> {
        let cursor = self
            .posts
            .find(doc! { "hashtags": { "$in": tags.to_vec() } })
            .sort(doc! { "created_at": -1 })
            .await?;

        Ok(cursor.try_collect().await?)
    }

    async fn search_posts_by_text(&self, text: &str) -> AppResult<Vec<Post>> {
        let filter = doc! {
            "text": { "$regex": escape_search_pattern(text), "$options": "i" }
        };

        let cursor = self
            .posts
            .find(filter)
            .sort(doc! { "created_at": -1 })
            .await?;

        Ok(cursor.try_collect().await?)
    }

    async fn increment_view_count(&self, id: &str) -> AppResult<Option<Post>> {
        let object_id = parse_object_id(id)?;

        let updated = self
            .posts
            .find_one_and_update(
                doc! { "_id": object_id },
                doc! { "$inc": { "view_count": 1_i64 }, "$set": { "updated_at": DateTime::now() } },
            )
            .return_document(ReturnDocument::After)
            .await?;

        Ok(updated)
    }

    async fn create_comment(&self, mut comment: Comment) -> AppResult<Comment> {
        let result = self.comments.insert_one(&comment).await?;
        comment.id = Some(inserted_id(&result)?);

        Ok(comment)
    }

    async fn find_comment(&self, id: &str) -> AppResult<Option<Comment>> {
        let object_id = parse_object_id(id)?;

        Ok(self.comments.find_one(doc! { "_id": object_id }).await?)
    }

    async fn find_comment_ids_by_post(&self, post_id: &str) -> AppResult<Vec<String>> {
        let cursor = self.comments.find(doc! { "post": post_id }).await?;
        let comments: Vec<Comment> = cursor.try_collect().await?;

        Ok(comments.iter().filter_map(Comment::id_string).collect())
    }

    async fn update_comment(&self, id: &str, text: String) -> AppResult<Option<Comment>> {
        let object_id = parse_object_id(id)?;

        let updated = self
            .comments
            .find_one_and_update(
                doc! { "_id": object_id },
                doc! { "$set": { "text": text, "updated_at": DateTime::now() } },
            )
            .return_document(ReturnDocument::After)
            .await?;

        Ok(updated)
    }

    async fn delete_comment(&self, id: &str) -> AppResult<bool> {
        let object_id = parse_object_id(id)?;

        let result = self.comments.delete_one(doc! { "_id": object_id }).await?;

        Ok(result.deleted_count > 0)
    }

    async fn delete_comments_by_post(&self, post_id: &str) -> AppResult<u64> {
        let result = self.comments.delete_many(doc! { "post": post_id }).await?;

        Ok(result.deleted_count)
    }

    async fn find_like(&self, target: &LikeTarget, user_id: &str) -> AppResult<Option<Like>> {
        let mut filter = Self::like_filter(target);
        filter.insert("user", user_id);

        Ok(self.likes.find_one(filter).await?)
    }

    async fn create_like(&self, mut like: Like) -> AppResult<Like> {
        let result = self.likes.insert_one(&like).await?;
        like.id = Some(inserted_id(&result)?);

        Ok(like)
    }

    async fn delete_likes(&self, target: &LikeTarget) -> AppResult<u64> {
        let result = self.likes.delete_many(Self::like_filter(target)).await?;

        Ok(result.deleted_count)
    }

    async fn delete_likes_for_comments(&self, comment_ids: &[String]) -> AppResult<u64> {
        if comment_ids.is_empty() {
            return Ok(0);
        }

        let result = self
            .likes
            .delete_many(doc! { "comment": { "$in": comment_ids.to_vec() } })
            .await?;

        Ok(result.deleted_count)
    }
}
