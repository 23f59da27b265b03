//! HTTP API driven through the router without a socket.

mod common;

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use pechakucha::server::handlers::AppState;
use pechakucha::server::router::build_router;
use pechakucha::store::MemoryStore;

fn app(store: MemoryStore) -> Router {
    build_router(AppState::new(Arc::new(store)))
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

fn deck_json() -> Value {
    json!({
        "title": "Launch review",
        "slides": ["Goals", "Numbers", "Next steps"],
        "slideDuration": 25,
        "fontSize": "large"
    })
}

#[tokio::test]
async fn health_reports_service() {
    let app = app(MemoryStore::new());
    let (status, body) = send(&app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "pechakucha");
}

#[tokio::test]
async fn create_then_get_round_trips_document() {
    let app = app(MemoryStore::new());
    let (status, created) = send(&app, "POST", "/api/presentations", Some(deck_json())).await;
    assert_eq!(status, StatusCode::CREATED);
    let id = created["id"].as_str().unwrap().to_string();
    assert!(!id.is_empty());
    assert_eq!(created["slideDuration"], 25);
    assert_eq!(created["fontSize"], "large");

    let (status, fetched) = send(&app, "GET", &format!("/api/presentations/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);

    let (status, listed) = send(&app, "GET", "/api/presentations", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn missing_fields_take_defaults() {
    let app = app(MemoryStore::new());
    let (status, created) = send(
        &app,
        "POST",
        "/api/presentations",
        Some(json!({"title": "Short", "slides": ["only"]})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["slideDuration"], 30);
    assert_eq!(created["fontSize"], "medium");
}

#[tokio::test]
async fn invalid_duration_is_rejected() {
    let app = app(MemoryStore::new());
    let mut body = deck_json();
    body["slideDuration"] = json!(22);
    let (status, error) = send(&app, "POST", "/api/presentations", Some(body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["error"], "Invalid presentation data");
    assert!(error.get("details").is_some());
}

#[tokio::test]
async fn empty_deck_is_rejected() {
    let app = app(MemoryStore::new());
    let mut body = deck_json();
    body["slides"] = json!([]);
    let (status, error) = send(&app, "POST", "/api/presentations", Some(body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["details"]["reason"]["kind"], "empty_slide_deck");
}

#[tokio::test]
async fn malformed_json_is_bad_request() {
    let app = app(MemoryStore::new());
    let request = Request::builder()
        .method("POST")
        .uri("/api/presentations")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn update_replaces_content_and_keeps_id() {
    let (store, id) = common::store_with(2, 20);
    let app = app(store);
    let (status, updated) = send(
        &app,
        "PATCH",
        &format!("/api/presentations/{id}"),
        Some(deck_json()),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["id"], id.as_str());
    assert_eq!(updated["title"], "Launch review");
    assert_eq!(updated["slides"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn unknown_id_is_not_found_everywhere() {
    let app = app(MemoryStore::new());
    let uri = "/api/presentations/does-not-exist";

    let (status, body) = send(&app, "GET", uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Presentation not found");

    let (status, _) = send(&app, "PATCH", uri, Some(deck_json())).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, "DELETE", uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_removes_presentation() {
    let (store, id) = common::store_with(1, 30);
    let app = app(store);
    let uri = format!("/api/presentations/{id}");

    let (status, body) = send(&app, "DELETE", &uri, None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    let (status, _) = send(&app, "GET", &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
