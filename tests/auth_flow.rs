#[macro_use]
mod common;

use actix_web::test;
use chrono::{Duration, Utc};
use serde_json::{json, Value};

use common::{bearer, registration, test_state};

#[actix_web::test]
async fn test_register_login_me_scenario() {
    let state = test_state();
    let app = init_app!(state.clone());

    let req = test::TestRequest::post()
        .uri("/v1/auth/register")
        .set_json(registration("Jo", "jo@x.com"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 201);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "success");
    assert_eq!(body["message"], "Thank you for registering with us.");
    assert_eq!(body["data"]["email"], "jo@x.com");
    assert!(body["data"].get("password").is_none());
    assert!(body["data"].get("passwordHash").is_none());
    let user_id = body["data"]["id"].as_str().unwrap().to_string();

    let req = test::TestRequest::post()
        .uri("/v1/auth/login")
        .set_json(json!({ "email": "jo@x.com", "password": "secret1" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: Value = test::read_body_json(resp).await;
    let token = body["accessToken"].as_str().unwrap().to_string();
    assert!(!token.is_empty());
    assert_eq!(state.tokens.verify(&token).unwrap(), user_id);

    let req = test::TestRequest::get()
        .uri("/v1/auth/me")
        .insert_header(bearer(&token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["email"], "jo@x.com");
    assert!(body["data"].get("password").is_none());
}

#[actix_web::test]
async fn test_duplicate_registration_is_rejected() {
    let app = init_app!(test_state());

    for expected in [201, 400] {
        let req = test::TestRequest::post()
            .uri("/v1/auth/register")
            .set_json(registration("Jo", "jo@x.com"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), expected);
    }
}

#[actix_web::test]
async fn test_register_with_short_password_is_rejected() {
    let app = init_app!(test_state());

    let req = test::TestRequest::post()
        .uri("/v1/auth/register")
        .set_json(json!({ "name": "Jo", "email": "jo@x.com", "mobile": "111", "password": "123" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 400);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"]["message"].is_string());
    assert!(body["error"]["timestamp"].is_string());
}

#[actix_web::test]
async fn test_login_with_wrong_password_issues_no_token() {
    let app = init_app!(test_state());
    register_and_login!(app, "Jo", "jo@x.com");

    let req = test::TestRequest::post()
        .uri("/v1/auth/login")
        .set_json(json!({ "email": "jo@x.com", "password": "wrong-password" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 400);
    let body: Value = test::read_body_json(resp).await;
    assert!(body.get("accessToken").is_none());
}

#[actix_web::test]
async fn test_login_without_password_is_rejected() {
    let app = init_app!(test_state());

    let req = test::TestRequest::post()
        .uri("/v1/auth/login")
        .set_json(json!({ "email": "jo@x.com" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 400);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(
        body["error"]["message"],
        "You are missing either email or password."
    );
}

#[actix_web::test]
async fn test_me_without_token_is_unauthorized() {
    let app = init_app!(test_state());

    let req = test::TestRequest::get().uri("/v1/auth/me").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 401);
}

#[actix_web::test]
async fn test_unknown_auth_path_is_not_found_without_token() {
    let app = init_app!(test_state());

    for uri in ["/v1/auth/unknown", "/v1/auth/me/extra"] {
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 404, "{}", uri);
    }

    // 공개 라우트에 잘못된 메서드로 와도 게이트가 끼어들지 않습니다
    let req = test::TestRequest::get().uri("/v1/auth/login").to_request();
    let resp = test::call_service(&app, req).await;
    assert_ne!(resp.status(), 401);
}

#[actix_web::test]
async fn test_expired_token_is_unauthorized() {
    let state = test_state();
    let app = init_app!(state.clone());
    let (user_id, _) = register_and_login!(app, "Jo", "jo@x.com");

    let expired = state
        .tokens
        .issue_at(&user_id, Utc::now() - Duration::days(8))
        .unwrap();

    let req = test::TestRequest::get()
        .uri("/v1/auth/me")
        .insert_header(bearer(&expired))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 401);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(
        body["error"]["message"],
        "This session has expired, Please login again."
    );
}

#[actix_web::test]
async fn test_tampered_token_is_unauthorized() {
    let app = init_app!(test_state());
    let (_, token) = register_and_login!(app, "Jo", "jo@x.com");

    let req = test::TestRequest::get()
        .uri("/v1/auth/me")
        .insert_header(bearer(&format!("{}x", token)))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 401);
}

#[actix_web::test]
async fn test_token_of_deleted_user_is_unauthorized() {
    let app = init_app!(test_state());
    let (user_id, token) = register_and_login!(app, "Jo", "jo@x.com");

    let req = test::TestRequest::delete()
        .uri(&format!("/v1/user/deleteUser/{}", user_id))
        .insert_header(bearer(&token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 204);

    let req = test::TestRequest::get()
        .uri("/v1/auth/me")
        .insert_header(bearer(&token))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 401);
}

#[actix_web::test]
async fn test_health_check() {
    let app = init_app!(test_state());

    let req = test::TestRequest::get().uri("/health").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["status"], "healthy");
}
