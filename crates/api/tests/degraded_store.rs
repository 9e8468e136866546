//! Behaviour when the document store is missing or failing.

mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use common::{body_json, delete, get, post_json, FailingStore};
use serde_json::json;

// ---------------------------------------------------------------------------
// No store configured
// ---------------------------------------------------------------------------

#[tokio::test]
async fn component_list_falls_back_to_default_catalog() {
    let app = common::build_test_app(None);
    let response = get(app, "/api/components").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let names: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap())
        .collect();
    assert_eq!(
        names,
        [
            "Arduino Uno R3",
            "ESP32 DevKit",
            "HC-SR04 Ultrasonic Sensor",
            "DHT22 Temperature & Humidity Sensor",
        ]
    );
    assert!(json[0]["created_at"].is_null());
}

#[tokio::test]
async fn default_catalog_honours_filters() {
    let app = common::build_test_app(None);
    let response = get(app, "/api/components?category=Sensors&search=humidity").await;

    let json = body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 1);
    assert_eq!(json[0]["id"], "dht22");
}

#[tokio::test]
async fn component_get_without_store_returns_503() {
    let app = common::build_test_app(None);
    let response = get(app, "/api/components/esp32").await;

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body_json(response).await["code"], "BACKEND_UNAVAILABLE");
}

#[tokio::test]
async fn mutations_without_store_return_503() {
    let response = post_json(
        common::build_test_app(None),
        "/api/users",
        json!({"name": "Ada", "email": "ada@example.com"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

    let response = delete(common::build_test_app(None), "/api/projects/anything").await;
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

    let response = get(common::build_test_app(None), "/api/projects").await;
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn health_reports_degraded_without_store() {
    let app = common::build_test_app(None);
    let json = body_json(get(app, "/health").await).await;

    assert_eq!(json["status"], "degraded");
    assert_eq!(json["store_healthy"], false);
}

// ---------------------------------------------------------------------------
// Store present but failing
// ---------------------------------------------------------------------------

#[tokio::test]
async fn store_failure_maps_to_500_with_store_error_text() {
    let app = common::build_test_app(Some(Arc::new(FailingStore)));
    let response = get(app, "/api/components").await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    assert_eq!(json["code"], "STORE_ERROR");
    assert!(json["error"].as_str().unwrap().contains("backend exploded"));
}

#[tokio::test]
async fn health_reports_degraded_when_ping_fails() {
    let app = common::build_test_app(Some(Arc::new(FailingStore)));
    let response = get(app, "/health").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["status"], "degraded");
}
