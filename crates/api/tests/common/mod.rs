#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use atal_api::config::{ServerConfig, StoreBackend};
use atal_api::router::build_app_router;
use atal_api::state::AppState;
use atal_db::memory::MemoryStore;
use atal_db::{Document, DocumentStore, DynStore, Query, StoreError};

/// Build a test `ServerConfig` with safe defaults.
///
/// Idea generation runs without the simulated delay so tests stay fast.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["*".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 5,
        idea_generation_delay_ms: 0,
        store_backend: StoreBackend::Memory,
    }
}

/// Build the full application router over the given store.
///
/// Goes through [`build_app_router`] so tests exercise the same middleware
/// stack as `main.rs`. Pass `None` to run in degraded mode.
pub fn build_test_app(store: Option<DynStore>) -> Router {
    let config = test_config();
    let state = AppState {
        store,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// A fresh, empty in-memory store.
pub fn memory_store() -> DynStore {
    Arc::new(MemoryStore::new())
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

async fn with_json(app: Router, method: Method, uri: &str, body: serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    with_json(app, Method::POST, uri, body).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    with_json(app, Method::PUT, uri, body).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Fault injection
// ---------------------------------------------------------------------------

/// A store whose every call fails as if the backend returned a 503.
pub struct FailingStore;

impl FailingStore {
    fn error() -> StoreError {
        StoreError::Api {
            status: 503,
            body: "backend exploded".to_string(),
        }
    }
}

#[async_trait]
impl DocumentStore for FailingStore {
    async fn get(&self, _collection: &str, _id: &str) -> Result<Option<Document>, StoreError> {
        Err(Self::error())
    }

    async fn set(&self, _collection: &str, _id: &str, _document: &Document) -> Result<(), StoreError> {
        Err(Self::error())
    }

    async fn delete(&self, _collection: &str, _id: &str) -> Result<(), StoreError> {
        Err(Self::error())
    }

    async fn query(
        &self,
        _collection: &str,
        _query: &Query,
    ) -> Result<Vec<(String, Document)>, StoreError> {
        Err(Self::error())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Err(Self::error())
    }
}
