//! Shared helpers for router-level tests

#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use regboard::{
    config::{Config, ServerConfig, StoreBackend, StoreConfig},
    create_router,
    db::RegistrationStore,
    AppState,
};
use serde_json::Value;
use tower::ServiceExt;

pub fn test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            rust_log: "debug".to_string(),
        },
        store: StoreConfig {
            backend: StoreBackend::Memory,
            database_url: None,
            max_connections: 1,
        },
    }
}

pub fn test_app(store: Arc<dyn RegistrationStore>) -> Router {
    create_router(AppState::new(store, test_config()))
}

/// Send a request and return the status with the decoded JSON body
pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    match body {
        Some(json) => send_raw(app, method, uri, json.to_string()).await,
        None => {
            let request = Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap();
            dispatch(app, request).await
        }
    }
}

/// Send a body verbatim with a JSON content type
pub async fn send_raw(
    app: &Router,
    method: Method,
    uri: &str,
    body: impl Into<String>,
) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.into()))
        .unwrap();
    dispatch(app, request).await
}

async fn dispatch(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, json)
}
