//! Tests for `AppError` → HTTP response mapping.
//!
//! The first group calls `IntoResponse` directly on `AppError` values; the
//! second sends malformed requests through the router and checks that they
//! come back as the same JSON error body.

mod common;

use atal_api::error::AppError;
use atal_api::router::panic_response;
use atal_core::error::CoreError;
use atal_db::StoreError;
use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::Router;
use common::{body_json, get as get_uri, memory_store, post_json};
use http_body_util::BodyExt;
use serde_json::json;
use tower_http::catch_panic::CatchPanicLayer;

/// Helper: convert an `AppError` into its status code and parsed JSON body.
async fn error_to_response(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

#[tokio::test]
async fn not_found_error_returns_404_without_id() {
    let err = AppError::Core(CoreError::NotFound {
        entity: "Project",
        id: "abc123".into(),
    });

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], "Project not found");
}

#[tokio::test]
async fn validation_error_returns_400() {
    let err = AppError::Core(CoreError::Validation("title: must not be empty".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"], "title: must not be empty");
}

#[tokio::test]
async fn bad_request_error_returns_400() {
    let err = AppError::BadRequest("invalid field value".into());

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "BAD_REQUEST");
    assert_eq!(json["error"], "invalid field value");
}

#[tokio::test]
async fn backend_unavailable_returns_503() {
    let err = AppError::Core(CoreError::BackendUnavailable("no store".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(json["code"], "BACKEND_UNAVAILABLE");
}

#[tokio::test]
async fn store_unavailable_returns_503() {
    let err = AppError::Store(StoreError::Unavailable("FIREBASE_PROJECT_ID is not set".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(json["code"], "BACKEND_UNAVAILABLE");
}

#[tokio::test]
async fn store_api_error_returns_500_with_detail() {
    let err = AppError::Store(StoreError::Api {
        status: 403,
        body: "permission denied".into(),
    });

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "STORE_ERROR");
    assert_eq!(
        json["error"],
        "Document store returned HTTP 403: permission denied"
    );
}

#[tokio::test]
async fn core_internal_error_is_sanitized() {
    let err = AppError::Core(CoreError::Internal("stack trace".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"], "An internal error occurred");
}

#[tokio::test]
async fn caught_panic_renders_sanitized_json() {
    let app: Router = Router::new()
        .route("/boom", get(|| async { panic!("secret detail") as () }))
        .layer(CatchPanicLayer::custom(panic_response));
    let response = get_uri(app, "/boom").await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    assert_eq!(json["code"], "INTERNAL_ERROR");
    assert_eq!(json["error"], "An internal error occurred");
}

// ---------------------------------------------------------------------------
// Extractor rejections go through the same boundary
// ---------------------------------------------------------------------------

fn assert_json_content_type(response: &axum::http::Response<Body>) {
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    assert!(content_type.starts_with("application/json"), "got {content_type}");
}

#[tokio::test]
async fn body_missing_required_field_returns_json_400() {
    let app = common::build_test_app(Some(memory_store()));
    let response = post_json(
        app,
        "/api/components",
        json!({"name": "x", "category": "Sensors"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_json_content_type(&response);
    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
    assert!(json["error"].as_str().unwrap().contains("description"));
}

#[tokio::test]
async fn unparsable_body_returns_json_400() {
    let app = common::build_test_app(Some(memory_store()));
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/projects/generate")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let response = common::send(app, request).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_json_content_type(&response);
    assert_eq!(body_json(response).await["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn body_without_json_content_type_returns_json_400() {
    let app = common::build_test_app(Some(memory_store()));
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/users")
        .body(Body::from(r#"{"name":"Ada","email":"ada@example.com"}"#))
        .unwrap();
    let response = common::send(app, request).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn malformed_query_returns_json_400() {
    let app = common::build_test_app(None);
    let response = get_uri(app, "/api/components?limit=-5").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_json_content_type(&response);
    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
    assert!(json["error"].as_str().unwrap().contains("limit"));
}

#[tokio::test]
async fn unknown_route_returns_json_404() {
    let app = common::build_test_app(None);
    let response = get_uri(app, "/api/gadgets").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], "Route not found");
}
