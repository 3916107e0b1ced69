//! 게시물 / 댓글 / 좋아요 DTO

pub mod request;
pub mod response;

pub use request::*;
pub use response::*;
