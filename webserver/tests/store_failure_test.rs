//! Store failure handling, using the mockall-generated `MockRecordStore`

mod fixtures;
mod helpers;

use axum::http::StatusCode;
use serde_json::json;

use courier_webserver::{WebServer, WebServerError, traits::MockRecordStore};
use fixtures::*;
use helpers::*;

#[tokio::test]
async fn test_contact_store_failure_is_internal_error() {
    let mut store = MockRecordStore::new();
    store
        .expect_create_contact()
        .times(1)
        .returning(|_| Err(WebServerError::Storage("disk full".to_string())));
    let router = WebServer::new(store).build_router();

    let (status, body) = send(&router, post_json("/api/contact", &contact_body())).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    // Store details stay out of the response
    assert_eq!(body, json!({ "error": "Failed to save contact data" }));
}

#[tokio::test]
async fn test_tracking_store_failure_is_internal_error() {
    let mut store = MockRecordStore::new();
    store
        .expect_get_tracking()
        .withf(|number: &str| number == "UOC123456789")
        .returning(|_| Err(WebServerError::Storage("tree unavailable".to_string())));
    let router = WebServer::new(store).build_router();

    let (status, body) = send(&router, get("/api/track/UOC123456789")).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Failed to fetch tracking data");
}

#[tokio::test]
async fn test_invalid_quote_never_reaches_store() {
    // No expectations: any store call would panic the handler
    let router = WebServer::new(MockRecordStore::new()).build_router();

    let (status, body) =
        send(&router, post_json("/api/quote", &quote_body(json!("-1"), "Same Day Delivery"))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid quote request data");
}

#[tokio::test]
async fn test_quote_persists_computed_cost() {
    let mut store = MockRecordStore::new();
    store
        .expect_create_quote()
        .withf(|quote| quote.estimated_cost == Some(300) && quote.weight == "2")
        .times(1)
        .returning(|quote| Ok(quote.into_record(42, chrono::Utc::now())));
    let router = WebServer::new(store).build_router();

    let (status, body) =
        send(&router, post_json("/api/quote", &quote_body(json!("2"), "International Delivery"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "success": true, "estimatedCost": 300, "id": 42 }));
}
