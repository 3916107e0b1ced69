//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들입니다. 핸들러는 요청 DTO를 검증하고
//! [`AppState`](crate::core::state::AppState)의 서비스를 호출한 뒤
//! `{status, data, message}` 형태로 응답합니다.
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Handlers (이 모듈) - HTTP 엔드포인트 처리         ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Services - 비즈니스 로직                        ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   Repositories - 데이터 접근                     ← Repository Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! 모든 핸들러는 `Result<HttpResponse, AppError>`를 반환하며, 실패는
//! `AppError`의 `ResponseError` 구현이 공통 에러 본문으로 변환합니다.
//!
//! - **`auth`**: 회원가입, 로그인, 현재 사용자
//! - **`users`**: 사용자 관리, 팔로우
//! - **`posts`**: 게시물, 댓글, 좋아요, 조회수

pub mod auth;
pub mod users;
pub mod posts;
