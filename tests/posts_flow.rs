#[macro_use]
mod common;

use actix_web::test;
use serde_json::{json, Value};

use common::{bearer, test_state};

#[actix_web::test]
async fn test_like_twice_yields_single_like() {
    let app = init_app!(test_state());
    let (_, token) = register_and_login!(app, "Jo", "jo@x.com");

    let req = test::TestRequest::post()
        .uri("/v1/post/createPost")
        .insert_header(bearer(&token))
        .set_json(json!({ "text": "hello", "hashtags": "rust, web,," }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 201);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["hashtags"], json!(["rust", "web"]));
    let post_id = body["data"]["id"].as_str().unwrap().to_string();

    let req = test::TestRequest::post()
        .uri(&format!("/v1/post/postLike/{}", post_id))
        .insert_header(bearer(&token))
        .to_request();
    let first: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(first["message"], "Post liked successfully");

    let req = test::TestRequest::post()
        .uri(&format!("/v1/post/postLike/{}", post_id))
        .insert_header(bearer(&token))
        .to_request();
    let second: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(second["message"], "Post already liked by the user");
    assert_eq!(first["data"]["id"], second["data"]["id"]);
}

#[actix_web::test]
async fn test_delete_post_removes_comments() {
    let app = init_app!(test_state());
    let (_, token) = register_and_login!(app, "Jo", "jo@x.com");

    let req = test::TestRequest::post()
        .uri("/v1/post/createPost")
        .insert_header(bearer(&token))
        .set_json(json!({ "text": "hello", "hashtags": "rust" }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let post_id = body["data"]["id"].as_str().unwrap().to_string();

    let req = test::TestRequest::post()
        .uri(&format!("/v1/post/postComment/{}", post_id))
        .insert_header(bearer(&token))
        .set_json(json!({ "text": "first!" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 201);
    let body: Value = test::read_body_json(resp).await;
    let comment_id = body["data"]["id"].as_str().unwrap().to_string();

    let req = test::TestRequest::post()
        .uri(&format!("/v1/post/commentLike/{}", comment_id))
        .insert_header(bearer(&token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 201);

    let req = test::TestRequest::delete()
        .uri(&format!("/v1/post/deletePost/{}", post_id))
        .insert_header(bearer(&token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 204);

    let req = test::TestRequest::post()
        .uri(&format!("/v1/post/commentLike/{}", comment_id))
        .insert_header(bearer(&token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);

    let req = test::TestRequest::post()
        .uri(&format!("/v1/post/increaseView/{}", post_id))
        .insert_header(bearer(&token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);
}

#[actix_web::test]
async fn test_only_author_can_delete_post() {
    let app = init_app!(test_state());
    let (_, author_token) = register_and_login!(app, "Jo", "jo@x.com");
    let (_, other_token) = register_and_login!(app, "Bo", "bo@x.com");

    let req = test::TestRequest::post()
        .uri("/v1/post/createPost")
        .insert_header(bearer(&author_token))
        .set_json(json!({ "text": "mine" }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let post_id = body["data"]["id"].as_str().unwrap().to_string();

    let req = test::TestRequest::delete()
        .uri(&format!("/v1/post/deletePost/{}", post_id))
        .insert_header(bearer(&other_token))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 404);
}

#[actix_web::test]
async fn test_search_and_view_count() {
    let app = init_app!(test_state());
    let (_, token) = register_and_login!(app, "Jo", "jo@x.com");

    for (text, tags) in [("Learning Rust (fast)", "rust"), ("Cooking", "food")] {
        let req = test::TestRequest::post()
            .uri("/v1/post/createPost")
            .insert_header(bearer(&token))
            .set_json(json!({ "text": text, "hashtags": tags }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 201);
    }

    let req = test::TestRequest::get()
        .uri("/v1/post/searchByTag?tags=food,none")
        .insert_header(bearer(&token))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
    assert_eq!(body["message"], "Post fetched successfully");

    let req = test::TestRequest::get()
        .uri("/v1/post/searchByText?text=rust%20(")
        .insert_header(bearer(&token))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let found = body["data"].as_array().unwrap();
    assert_eq!(found.len(), 1);
    let post_id = found[0]["id"].as_str().unwrap().to_string();

    let req = test::TestRequest::post()
        .uri(&format!("/v1/post/increaseView/{}", post_id))
        .insert_header(bearer(&token))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["viewCount"], 1);
}

#[actix_web::test]
async fn test_post_routes_require_token() {
    let app = init_app!(test_state());

    let req = test::TestRequest::post()
        .uri("/v1/post/createPost")
        .set_json(json!({ "text": "hello" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 401);
}
