//! 게시물 / 댓글 / 좋아요 저장소

pub mod post_repo;
pub mod mongo_post_repo;
pub mod memory_post_repo;

pub use post_repo::PostRepository;
pub use mongo_post_repo::MongoPostRepository;
pub use memory_post_repo::InMemoryPostRepository;
