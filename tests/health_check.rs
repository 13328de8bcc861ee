mod common;

use common::TestApp;
use reqwest::Client;
use std::sync::Arc;
use tile_suggest_service::services::providers::mock::MockTextProvider;

#[tokio::test]
async fn health_check_works() {
    let provider = Arc::new(MockTextProvider::with_reply("[]"));
    let app = TestApp::spawn(provider).await;
    let client = Client::new();

    let response = client
        .get(format!("{}/health", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert!(response.status().is_success());

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "tile-suggest-service");
}

#[tokio::test]
async fn readiness_check_works() {
    let provider = Arc::new(MockTextProvider::with_reply("[]"));
    let app = TestApp::spawn(provider).await;
    let client = Client::new();

    let response = client
        .get(format!("{}/ready", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert!(response.status().is_success());
}

#[tokio::test]
async fn readiness_check_reports_unconfigured_provider() {
    let provider = Arc::new(MockTextProvider::disabled());
    let app = TestApp::spawn(provider).await;
    let client = Client::new();

    let response = client
        .get(format!("{}/ready", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 503);
}
