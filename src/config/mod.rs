//! # Configuration Module
//!
//! 백엔드 서비스의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반의 설정값들을 시작 시점에 읽어 값 객체로 만들고,
//! 서비스 생성자에 주입합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 데이터베이스, 저장소, 서버, 환경, 패스워드 해싱 설정
//! - [`auth_config`] - JWT 세션 토큰 설정
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 서버 설정
//! export HOST="0.0.0.0"
//! export PORT="3000"
//!
//! # 저장소
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="social"
//! export STORE_BACKEND="mongo"          # mongo | memory
//! export DB_OPERATION_TIMEOUT_MS="5000"
//!
//! # JWT 설정
//! export JWT_SECRET="your-super-secret-key"
//! export JWT_EXPIRATION_DAYS="7"
//!
//! # 환경 / 보안
//! export ENVIRONMENT="production"      # development, test, staging, production
//! export BCRYPT_COST="10"              # 4-15 범위
//! ```

pub mod data_config;
pub mod auth_config;

pub use data_config::*;
pub use auth_config::*;
