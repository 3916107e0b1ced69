//! 게시물 관련 요청 DTO

pub mod post_request;
pub mod comment_request;

pub use post_request::*;
pub use comment_request::*;
