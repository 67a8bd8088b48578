//! Test helper utilities for webserver integration tests

use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use serde_json::Value;
use tower::ServiceExt;

use courier_webserver::{MemoryRecordStore, RecordStore, WebServer, services::seed_tracking_data};

/// Router over a seeded in-memory store
pub async fn seeded_router() -> Router {
    router_with(MemoryRecordStore::new()).await
}

/// Router over any store, seeded with the sample tracking data
pub async fn router_with<S: RecordStore + 'static>(store: S) -> Router {
    seed_tracking_data(&store).await.unwrap();
    WebServer::new(store).build_router()
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().method(Method::GET).uri(uri).body(Body::empty()).unwrap()
}

pub fn post_json(uri: &str, body: &Value) -> Request<Body> {
    post_raw(uri, &body.to_string())
}

/// POST with a JSON content type and an arbitrary (possibly malformed) body
pub fn post_raw(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Run one request through the router and decode the JSON reply
pub async fn send(router: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();

    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

/// Run one request through the router and return the raw reply body
pub async fn send_raw(router: &Router, request: Request<Body>) -> (StatusCode, String) {
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

/// Completion flags of a tracking reply's timeline
pub fn completed_flags(body: &Value) -> Vec<bool> {
    body["timeline"]
        .as_array()
        .expect("timeline array")
        .iter()
        .map(|step| step["completed"].as_bool().unwrap())
        .collect()
}
