//! 게시물 관련 응답 DTO

pub mod post_response;

pub use post_response::*;
