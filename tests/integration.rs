//! Integration tests exercising the full HTTP surface and the lifecycle.

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use tower::ServiceExt;

use fastapi_starter::api::{create_router, AppState};
use fastapi_starter::config::Settings;
use fastapi_starter::lifecycle::{Lifecycle, LifecycleState};

async fn get(uri: &str) -> (StatusCode, Vec<u8>) {
    let response = create_router(AppState::default())
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, body.to_vec())
}

#[tokio::test]
async fn healthz_returns_ok_body() {
    let (status, body) = get("/healthz").await;
    assert_eq!(status, StatusCode::OK);

    let value: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(value, json!({"status": "ok"}));
}

#[tokio::test]
async fn root_returns_greeting_body() {
    let (status, body) = get("/").await;
    assert_eq!(status, StatusCode::OK);

    let value: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(value, json!({"message": "Hello from FastAPI"}));
}

#[tokio::test]
async fn healthz_responses_are_byte_identical() {
    let (_, first) = get("/healthz").await;
    let (_, second) = get("/healthz").await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn unknown_route_is_404() {
    let (status, _) = get("/nope").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn openapi_document_carries_the_app_title() {
    let (status, body) = get("/openapi.json").await;
    assert_eq!(status, StatusCode::OK);

    let doc: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(doc["info"]["title"], "fastapi-starter");
    assert!(doc["paths"].get("/healthz").is_some());
    assert!(doc["paths"].get("/").is_some());
}

#[tokio::test]
async fn requests_succeed_between_startup_and_shutdown() {
    let settings = Arc::new(Settings::default());
    let mut lifecycle = Lifecycle::new(settings.clone());

    lifecycle.start().await.unwrap();
    assert_eq!(lifecycle.state(), LifecycleState::Running);

    let router = create_router(AppState::new(settings));
    let response = router
        .oneshot(
            Request::builder()
                .uri("/healthz")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    lifecycle.stop().await;
    assert_eq!(lifecycle.state(), LifecycleState::Stopped);
}

#[tokio::test]
async fn shutdown_runs_even_when_serving_fails() {
    let settings = Arc::new(Settings::default());
    let mut lifecycle = Lifecycle::new(settings.clone());

    lifecycle.start().await.unwrap();

    // Model a failed serve phase; shutdown still runs on the way out.
    let serve_result: Result<(), std::io::Error> =
        Err(std::io::Error::new(std::io::ErrorKind::AddrInUse, "bind failed"));
    lifecycle.stop().await;

    assert!(serve_result.is_err());
    assert_eq!(lifecycle.state(), LifecycleState::Stopped);
}
