//! 사용자 저장소

pub mod user_repo;
pub mod mongo_user_repo;
pub mod memory_user_repo;

pub use user_repo::UserRepository;
pub use mongo_user_repo::MongoUserRepository;
pub use memory_user_repo::InMemoryUserRepository;
