//! 소셜 서비스 메인 애플리케이션
//!
//! 설정을 읽어 저장소(MongoDB 또는 메모리)를 고르고, 서비스를 조립해
//! `AppState`로 등록한 뒤 Actix-web HTTP 서버를 구동합니다.

use std::sync::Arc;

use actix_cors::Cors;
use actix_governor::{Governor, GovernorConfigBuilder};
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use env_logger::Env;
use log::{error, info, warn};

use social_service_backend::config::{
    DatabaseConfig, Environment, JwtConfig, PasswordConfig, RateLimitConfig, ServerConfig, StoreBackend,
    StoreConfig,
};
use social_service_backend::core::errors::AppError;
use social_service_backend::core::state::AppState;
use social_service_backend::db::Database;
use social_service_backend::repositories::posts::{InMemoryPostRepository, MongoPostRepository};
use social_service_backend::repositories::users::{InMemoryUserRepository, MongoUserRepository};
use social_service_backend::routes::configure_all_routes;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    load_env_file();
    init_logging();

    let environment = Environment::current();
    environment.install();

    info!("🚀 소셜 서비스 시작중... ({:?})", environment);

    let state = build_app_state().await.map_err(|e| {
        error!("❌ 서비스 초기화 실패: {}", e);
        std::io::Error::other(e.to_string())
    })?;

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    start_http_server(state).await
}

/// HTTP 서버를 구성하고 실행합니다
///
/// 미들웨어는 바깥쪽부터 경로 정규화, 접근 로그, CORS, Rate Limiting 순으로 요청을 처리합니다.
///
/// # Errors
///
/// * `std::io::Error` - Rate Limiting 설정 오류, 포트 바인딩 실패
async fn start_http_server(state: AppState) -> std::io::Result<()> {
    let bind_address = format!("{}:{}", ServerConfig::host(), ServerConfig::port());
    let rate_limit = RateLimitConfig::from_env();

    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit.per_second)
        .burst_size(rate_limit.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| std::io::Error::other("invalid rate limit configuration"))?;

    info!(
        "🛡️ Rate Limiting: 초당 {}요청, 버스트 {}개",
        rate_limit.per_second, rate_limit.burst_size
    );
    info!("🌐 http://{} (health: /health)", bind_address);

    let state = web::Data::new(state);

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(Governor::new(&governor_conf))
            .wrap(configure_cors())
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .configure(configure_all_routes)
    })
    .bind(bind_address)?
    .run()
    .await
}

/// `PROFILE`에 맞는 env 파일을 읽습니다
///
/// * `PROFILE=dev` (기본값) - `.env.dev`
/// * `PROFILE=prod` - `.env.prod`
/// * 기타 - `.env`
///
/// 파일이 없어도 이미 설정된 환경 변수만으로 계속 진행합니다.
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    let file_name = match profile.as_str() {
        "prod" => ".env.prod",
        "dev" => ".env.dev",
        _ => ".env",
    };

    // 로거 초기화 전이므로 결과는 stderr로 출력
    match dotenv::from_filename(file_name) {
        Ok(_) => eprintln!("[{}] {} 로드 됨", profile, file_name),
        Err(e) => eprintln!("[{}] {} 로드 실패: {}", profile, file_name, e),
    }
}

/// `RUST_LOG` 기반 로거 초기화 (기본값 "info,actix_web=debug")
///
/// ```bash
/// RUST_LOG=social_service_backend::middlewares=debug cargo run
/// ```
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
}

/// 설정에 따라 저장소를 고르고 서비스를 조립합니다
///
/// `STORE_BACKEND=memory`이면 MongoDB 없이 프로세스 메모리에 저장합니다.
/// MongoDB를 사용하면 연결 후 이메일 유니크 인덱스 등을 생성합니다.
///
/// # Errors
///
/// * `AppError` - 운영 환경의 JWT 비밀키 누락, MongoDB 연결 또는 인덱스 생성 실패
async fn build_app_state() -> Result<AppState, AppError> {
    let jwt = JwtConfig::from_env()?;
    let store = StoreConfig::from_env();
    let bcrypt_cost = PasswordConfig::bcrypt_cost();
    let database_config = DatabaseConfig::from_env();

    info!("⏱️ 저장소 연산 타임아웃: {:?}", store.operation_timeout);

    match database_config.backend {
        StoreBackend::Memory => {
            warn!("🧪 인메모리 저장소 사용 - 재시작하면 데이터가 사라집니다");

            Ok(AppState::new(
                Arc::new(InMemoryUserRepository::new()),
                Arc::new(InMemoryPostRepository::new()),
                &jwt,
                store,
                bcrypt_cost,
            ))
        }
        StoreBackend::Mongo => {
            info!("📡 데이터베이스 연결 중...");

            let database = Database::connect(&database_config).await?;

            let user_repo = MongoUserRepository::new(&database);
            let post_repo = MongoPostRepository::new(&database);
            user_repo.create_indexes().await?;
            post_repo.create_indexes().await?;

            info!("✅ {} 인덱스 준비 완료", database.database_name());

            Ok(AppState::new(
                Arc::new(user_repo),
                Arc::new(post_repo),
                &jwt,
                store,
                bcrypt_cost,
            ))
        }
    }
}

/// 프론트엔드 개발 서버(3000, 5173)에서의 요청을 허용하는 CORS 설정
///
/// 토큰은 Bearer 헤더로만 오가므로 쿠키 자격 증명은 허용하지 않습니다.
fn configure_cors() -> Cors {
    Cors::default()
        .allowed_origin("http://localhost:3000")
        .allowed_origin("http://127.0.0.1:3000")
        .allowed_origin("http://localhost:5173")
        .allowed_origin("http://127.0.0.1:5173")
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        .max_age(3600)
}
