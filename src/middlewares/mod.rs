//! # Middlewares
//!
//! - [`AuthMiddleware`] - 보호된 라우트 앞에서 세션 토큰을 검증하는 인증 게이트

pub mod auth_middleware;
mod auth_inner;

pub use auth_middleware::AuthMiddleware;
