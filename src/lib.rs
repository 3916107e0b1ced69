//! 소셜 서비스 백엔드
//!
//! 이메일/비밀번호 회원가입과 로그인, JWT 세션 토큰, 팔로우 관계,
//! 게시물/댓글/좋아요를 제공하는 Actix-web 기반 REST API입니다.
//!
//! # Features
//!
//! - **사용자 관리**: 회원가입, 프로필 수정, 계정 삭제, 이름 검색
//! - **JWT 인증**: HS256 서명, 7일 만료의 상태 없는 세션 토큰
//! - **팔로우**: 중복 없는 팔로워/팔로잉 관계
//! - **게시물**: 해시태그/본문 검색, 댓글, 좋아요, 조회수
//! - **저장소**: MongoDB 또는 인메모리 (`STORE_BACKEND`)
//!
//! # Architecture
//!
//! ```text
//! 요청 ─▶ routes ─▶ AuthMiddleware ─▶ handlers ─▶ services ─▶ repositories
//!          │          (Bearer 검증,       │            │          ├─ MongoDB
//!          │           사용자 조회)        │            │          └─ 메모리
//!          └─ /health                    └─ DTO 변환    └─ 저장소 호출마다 타임아웃
//! ```
//!
//! 서비스는 전역 싱글톤이 아니라 [`core::state::AppState`]에 묶여
//! `web::Data`로 주입됩니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use social_service_backend::config::JwtConfig;
//! use social_service_backend::core::state::AppState;
//! use social_service_backend::routes::configure_all_routes;
//!
//! let state = AppState::in_memory(&JwtConfig::from_env()?, 4);
//! let app = App::new()
//!     .app_data(web::Data::new(state))
//!     .configure(configure_all_routes);
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod middlewares;
