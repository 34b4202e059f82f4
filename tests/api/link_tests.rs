//! Link Generation API Tests

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use crate::common::TestApp;

/// Test a valid invitation request returns the fully composed link
#[tokio::test]
async fn test_generate_invitation_link() {
    let app = TestApp::new();

    let response = app
        .post_json(
            "/generate-link",
            &json!({ "type": "invitation", "payload": { "eventId": "12345" } }),
        )
        .await;

    response.assert_status(StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["success"], json!(true));
    assert_eq!(
        body["link"],
        json!(
            "https://snapora.com/invite/12345\
             ?apn=com.snapora.app\
             &link=https%3A%2F%2Fsnapora.com%2Finvite%2F12345\
             &afl=https%3A%2F%2Fplay.google.com%2Fstore%2Fapps%2Fdetails%3Fid%3Dcom.snapora.app"
        )
    );
}

/// Test shareApp succeeds without a payload
#[tokio::test]
async fn test_share_app_without_payload() {
    let app = TestApp::new();

    let response = app.post_json("/generate-link", &json!({ "type": "shareApp" })).await;

    response.assert_status(StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["success"], json!(true));
    let link = body["link"].as_str().unwrap();
    assert!(link.starts_with("https://snapora.com/share?apn=com.snapora.app&"));
}

/// Test a missing type is rejected with the documented message
#[tokio::test]
async fn test_missing_type_is_rejected() {
    let app = TestApp::new();

    let response = app.post_json("/generate-link", &json!({})).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(
        body,
        json!({ "success": false, "message": "Link type is required" })
    );
}

/// Test an empty-string type behaves like a missing type
#[tokio::test]
async fn test_empty_type_is_rejected() {
    let app = TestApp::new();

    let response = app
        .post_json("/generate-link", &json!({ "type": "", "payload": {} }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["message"], json!("Link type is required"));
}

/// Test an unknown type is rejected with its name in the message
#[tokio::test]
async fn test_unknown_type_is_rejected() {
    let app = TestApp::new();

    let response = app
        .post_json("/generate-link", &json!({ "type": "bogus", "payload": {} }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(
        body,
        json!({ "success": false, "message": "Invalid link type: bogus" })
    );
}

/// Test a missing payload is rejected for types that require one
#[tokio::test]
async fn test_missing_payload_is_rejected() {
    let app = TestApp::new();

    let response = app
        .post_json("/generate-link", &json!({ "type": "invitation" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(
        body,
        json!({ "success": false, "message": "Payload is required for this link type." })
    );
}

/// Test an empty payload names the first missing field
#[tokio::test]
async fn test_missing_token_is_rejected() {
    let app = TestApp::new();

    let response = app
        .post_json("/generate-link", &json!({ "type": "resetPassword", "payload": {} }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(
        body,
        json!({ "success": false, "message": "token is required for resetPassword links." })
    );
}

/// Test a partial subAdminInvite payload names the second field
#[tokio::test]
async fn test_partial_sub_admin_payload_is_rejected() {
    let app = TestApp::new();

    let response = app
        .post_json(
            "/generate-link",
            &json!({ "type": "subAdminInvite", "payload": { "eventId": "e1" } }),
        )
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(
        body,
        json!({ "success": false, "message": "invitedUserId is required for subAdminInvite links." })
    );
}

/// Test repeated identical requests yield identical links
#[tokio::test]
async fn test_generation_is_idempotent_over_http() {
    let app = TestApp::new();
    let request = json!({ "type": "attendance", "payload": { "eventId": "e77" } });

    let first: Value = app.post_json("/generate-link", &request).await.json();
    let second: Value = app.post_json("/generate-link", &request).await.json();

    assert_eq!(first, second);
    assert_eq!(first["success"], json!(true));
}

/// Test a custom domain flows through from settings
#[tokio::test]
async fn test_custom_domain_settings_are_used() {
    let mut settings = crate::common::test_settings();
    settings.link.domain = "https://links.example.com".into();
    let app = TestApp::with_settings(settings);

    let response = app
        .post_json(
            "/generate-link",
            &json!({ "type": "resetPassword", "payload": { "token": "tok-9" } }),
        )
        .await;

    response.assert_status(StatusCode::OK);
    let body: Value = response.json();
    let link = body["link"].as_str().unwrap();
    assert!(link.starts_with("https://links.example.com/reset-password/tok-9?"));
    assert!(link.contains("link=https%3A%2F%2Flinks.example.com%2Freset-password%2Ftok-9"));
}

/// Test malformed JSON bodies surface in the standard error envelope
#[tokio::test]
async fn test_malformed_body_is_rejected() {
    let app = TestApp::new();

    let response = app
        .server
        .post("/generate-link")
        .bytes("{not json".into())
        .content_type("application/json")
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["success"], json!(false));
    assert!(body["message"].as_str().is_some_and(|m| !m.is_empty()));
}
