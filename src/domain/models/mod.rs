//! # Domain Models Module
//!
//! 저장되지 않는 인증 관련 값 객체들입니다.
//!
//! - [`token`] - JWT 클레임
//! - [`auth`] - 게이트가 요청에 붙이는 인증된 사용자

pub mod auth;
pub mod token;

pub use auth::*;
pub use token::*;
