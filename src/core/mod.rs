//! # Core Module
//!
//! 애플리케이션 전역에서 공유되는 핵심 타입을 제공합니다.
//!
//! - [`errors`] - `AppError`와 중앙 에러 응답기
//! - [`state`] - 서비스 묶음 `AppState` (의존성 주입)
//!
//! 서비스는 전역 레지스트리 대신 생성자 주입으로 조립됩니다.
//!
//! ```rust,ignore
//! let state = AppState::new(user_repo, post_repo, &jwt_config, store_config, bcrypt_cost);
//!
//! HttpServer::new(move || {
//!     App::new()
//!         .app_data(web::Data::new(state.clone()))
//!         .configure(configure_all_routes)
//! })
//! ```

pub mod errors;
pub mod state;

pub use errors::*;
pub use state::*;
