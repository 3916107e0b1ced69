//! # Service Layer
//!
//! 비즈니스 규칙을 담당하는 계층입니다. 서비스는 저장소 trait 객체와 설정 값을
//! 생성자로 주입받으며, [`AppState`](crate::core::state::AppState)가 이들을 묶어 핸들러에 전달합니다.
//!
//! - [`auth`] - JWT 세션 토큰 발급/검증
//! - [`users`] - 사용자 자격 증명과 팔로우 관계
//! - [`posts`] - 게시물, 댓글, 좋아요

pub mod auth;
pub mod users;
pub mod posts;
