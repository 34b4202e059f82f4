//! Health Check and Metrics API Tests

use axum::http::StatusCode;
use serde_json::Value;

use crate::common::TestApp;

/// Test basic health check endpoint returns 200 OK
#[tokio::test]
async fn test_health_check_returns_ok() {
    let app = TestApp::new();

    let response = app.get("/health").await;

    response.assert_status(StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert!(body["version"].as_str().is_some());
}

/// Test liveness probe endpoint
#[tokio::test]
async fn test_liveness_probe() {
    let app = TestApp::new();

    let response = app.get("/health/live").await;

    response.assert_status(StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["status"], "alive");
}

/// Test readiness probe endpoint reports process state
#[tokio::test]
async fn test_readiness_probe() {
    let app = TestApp::new();

    let response = app.get("/health/ready").await;

    response.assert_status(StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["status"], "ready");
    assert!(body["uptime_seconds"].as_u64().is_some());
    assert!(body["started_at"].as_str().is_some());
}

/// Test metrics endpoint exposes link counters after a generation
#[tokio::test]
async fn test_metrics_endpoint() {
    let app = TestApp::new();

    app.post_json(
        "/generate-link",
        &serde_json::json!({ "type": "shareApp" }),
    )
    .await
    .assert_status(StatusCode::OK);

    let response = app.get("/metrics").await;

    response.assert_status(StatusCode::OK);
    let body = response.text();
    assert!(body.contains("link_server_links_generated_total"));
}

/// Test responses carry the baseline security headers
#[tokio::test]
async fn test_security_headers_present() {
    let app = TestApp::new();

    let response = app.get("/health").await;

    assert_eq!(response.header("x-content-type-options"), "nosniff");
    assert_eq!(response.header("x-frame-options"), "DENY");
}
