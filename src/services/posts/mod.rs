//! 게시물 서비스

pub mod post_service;

pub use post_service::*;
