#[path = "common/mod.rs"]
mod common;

use actix_web::{http::StatusCode, test};
use common::{client::TestClient, TestContext};
use eventdir::utils::token::extract_token_parts;
use serde_json::json;

#[tokio::test]
async fn creating_user_returns_working_token() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/v2.1/users")
        .set_json(json!({
            "username": "freshuser",
            "full_name": "Fresh User",
            "email": "fresh@test.com"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(resp).await;
    let token = body["token"].as_str().expect("token missing").to_string();

    let (user_id, _secret) = extract_token_parts(&token).expect("token should parse");
    let user = ctx
        .db
        .get_user_by_id(user_id)
        .await
        .expect("lookup failed")
        .expect("user should exist");
    assert_eq!(user.username, "freshuser");

    // the token authenticates a mutating request
    let event_id = client.create_test_event().await;
    let talk_id = client.create_test_talk(event_id).await;
    let req = test::TestRequest::post()
        .uri(&format!("/v2.1/talks/{}/claims", talk_id))
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
}

#[tokio::test]
async fn creating_duplicate_username_conflicts() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    for (email, expected) in [
        ("first@test.com", StatusCode::OK),
        ("second@test.com", StatusCode::CONFLICT),
    ] {
        let req = test::TestRequest::post()
            .uri("/v2.1/users")
            .set_json(json!({
                "username": "doubled",
                "full_name": "Doubled User",
                "email": email
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), expected);
    }
}

#[tokio::test]
async fn creating_user_with_empty_username_fails() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/v2.1/users")
        .set_json(json!({
            "username": "  ",
            "full_name": "Nameless",
            "email": "nameless@test.com"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}
