#[path = "common/mod.rs"]
mod common;

use actix_web::{http::StatusCode, test};
use common::{client::TestClient, TestContext};

#[tokio::test]
async fn claiming_talk_without_login_fails() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let event_id = client.create_test_event().await;
    let talk_id = client.create_test_talk(event_id).await;

    let req = test::TestRequest::post()
        .uri(&format!("/v2.1/talks/{}/claims", talk_id))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn claiming_talk_succeeds() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let (user_id, user_token) = client.create_test_user(None).await;
    let event_id = client.create_test_event().await;
    let talk_id = client.create_test_talk(event_id).await;

    let req = test::TestRequest::post()
        .uri(&format!("/v2.1/talks/{}/claims", talk_id))
        .insert_header(("Authorization", format!("Bearer {}", user_token)))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::CREATED);
    let location = resp
        .headers()
        .get("Location")
        .expect("Location header missing")
        .to_str()
        .unwrap()
        .to_string();
    assert!(location.ends_with(&format!("/v2.1/talks/{}/claims", talk_id)));

    assert!(ctx
        .db
        .has_claim(talk_id, user_id)
        .await
        .expect("claim check failed"));
}

#[tokio::test]
async fn claiming_talk_twice_conflicts() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let (_user_id, user_token) = client.create_test_user(None).await;
    let event_id = client.create_test_event().await;
    let talk_id = client.create_test_talk(event_id).await;

    for expected in [StatusCode::CREATED, StatusCode::CONFLICT] {
        let req = test::TestRequest::post()
            .uri(&format!("/v2.1/talks/{}/claims", talk_id))
            .insert_header(("Authorization", format!("Bearer {}", user_token)))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), expected);
    }
}

#[tokio::test]
async fn claiming_unknown_talk_fails() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let (_user_id, user_token) = client.create_test_user(None).await;

    let req = test::TestRequest::post()
        .uri("/v2.1/talks/999999/claims")
        .insert_header(("Authorization", format!("Bearer {}", user_token)))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Talk not found");
}

#[tokio::test]
async fn rejecting_claim_requires_event_admin() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let (claimant_id, _) = client.create_test_user(None).await;
    let (_other_id, other_token) = client.create_test_user(None).await;
    let event_id = client.create_test_event().await;
    let talk_id = client.create_test_talk(event_id).await;
    let claim_id = ctx
        .db
        .create_claim(talk_id, claimant_id)
        .await
        .expect("Failed to create claim");

    let req = test::TestRequest::delete()
        .uri(&format!("/v2.1/talks/{}/claims/{}", talk_id, claim_id))
        .insert_header(("Authorization", format!("Bearer {}", other_token)))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn rejecting_claim_deletes_it() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let (claimant_id, _) = client.create_test_user(None).await;
    let (admin_id, admin_token) = client.create_test_user(None).await;
    let event_id = client.create_event_with_admin(admin_id).await;
    let talk_id = client.create_test_talk(event_id).await;
    let claim_id = ctx
        .db
        .create_claim(talk_id, claimant_id)
        .await
        .expect("Failed to create claim");

    // No mail transport is configured in tests; the rejection must still
    // land as 204 with the claim gone.
    let req = test::TestRequest::delete()
        .uri(&format!("/v2.1/talks/{}/claims/{}", talk_id, claim_id))
        .insert_header(("Authorization", format!("Bearer {}", admin_token)))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    let location = resp
        .headers()
        .get("Location")
        .expect("Location header missing")
        .to_str()
        .unwrap()
        .to_string();
    assert!(location.ends_with(&format!("/v2.1/talks/{}/claims", talk_id)));

    assert!(!ctx
        .db
        .has_claim(talk_id, claimant_id)
        .await
        .expect("claim check failed"));
}

#[tokio::test]
async fn rejecting_claim_of_wrong_talk_fails() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let (claimant_id, _) = client.create_test_user(None).await;
    let (admin_id, admin_token) = client.create_test_user(None).await;
    let event_id = client.create_event_with_admin(admin_id).await;
    let talk_id = client.create_test_talk(event_id).await;
    let other_talk_id = client.create_test_talk(event_id).await;
    let claim_id = ctx
        .db
        .create_claim(talk_id, claimant_id)
        .await
        .expect("Failed to create claim");

    let req = test::TestRequest::delete()
        .uri(&format!("/v2.1/talks/{}/claims/{}", other_talk_id, claim_id))
        .insert_header(("Authorization", format!("Bearer {}", admin_token)))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Claim not found");
}
