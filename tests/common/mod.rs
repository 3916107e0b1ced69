//! 통합 테스트 공통 도우미
//!
//! 인메모리 저장소 위에서 전체 라우트를 구동합니다.
#![allow(dead_code)]

use serde_json::{json, Value};
use social_service_backend::config::JwtConfig;
use social_service_backend::core::state::AppState;

pub const TEST_SECRET: &str = "test-secret";

/// bcrypt 비용 4의 인메모리 애플리케이션 상태
pub fn test_state() -> AppState {
    AppState::in_memory(&JwtConfig::new(TEST_SECRET, 7), 4)
}

pub fn registration(name: &str, email: &str) -> Value {
    json!({
        "name": name,
        "email": email,
        "mobile": "111",
        "password": "secret1",
    })
}

pub fn bearer(token: &str) -> (&'static str, String) {
    ("Authorization", format!("Bearer {}", token))
}

/// 전체 라우트를 등록한 테스트 서비스를 만듭니다.
macro_rules! init_app {
    ($state:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data(actix_web::web::Data::new($state))
                .configure(social_service_backend::routes::configure_all_routes),
        )
        .await
    };
}

/// 회원가입 후 로그인하여 `(사용자 ID, 액세스 토큰)`을 돌려줍니다.
macro_rules! register_and_login {
    ($app:expr, $name:expr, $email:expr) => {{
        let req = actix_web::test::TestRequest::post()
            .uri("/v1/auth/register")
            .set_json(common::registration($name, $email))
            .to_request();
        let resp = actix_web::test::call_service(&$app, req).await;
        assert_eq!(resp.status(), 201);
        let body: serde_json::Value = actix_web::test::read_body_json(resp).await;
        let id = body["data"]["id"].as_str().unwrap().to_string();

        let req = actix_web::test::TestRequest::post()
            .uri("/v1/auth/login")
            .set_json(serde_json::json!({ "email": $email, "password": "secret1" }))
            .to_request();
        let body: serde_json::Value = actix_web::test::call_and_read_body_json(&$app, req).await;
        let token = body["accessToken"].as_str().unwrap().to_string();

        (id, token)
    }};
}
