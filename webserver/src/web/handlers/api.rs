//! REST API handlers
//!
//! JSON endpoints for the site's forms and the tracking lookup. Every failure
//! renders as `{"error": "..."}` through `WebServerError`.

use axum::{
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    response::Json,
};
use chrono::Utc;
use shared::{
    ContactSubmission, NewContactSubmission, NewPickupRequest, NewQuoteRequest, PickupRequest, QuoteRequest,
    RecordId, SharedError, logging,
};
use std::sync::Arc;
use tracing::{debug, info};

use crate::core::{build_timeline, estimate_cost};
use crate::error::{WebServerError, WebServerResult};
use crate::state::WebServerState;
use crate::traits::RecordStore;
use crate::types::{HealthStatus, QuoteReceipt, QuoteSubmission, SubmissionReceipt, TrackingResponse};

type AppState<S> = State<Arc<WebServerState<S>>>;

const INVALID_CONTACT: &str = "Invalid contact data";
const INVALID_PICKUP: &str = "Invalid pickup request data";
const INVALID_QUOTE: &str = "Invalid quote request data";
const INVALID_ID: &str = "Invalid record id";

/// Map a malformed body to the endpoint's generic 400 message
fn rejected_body(message: &str, rejection: JsonRejection) -> WebServerError {
    debug!("Rejected request body: {}", rejection.body_text());
    WebServerError::invalid_request(message)
}

fn invalid_fields(message: &str, err: SharedError) -> WebServerError {
    debug!("Validation failed: {}", err);
    WebServerError::invalid_request(message)
}

/// Log the underlying store error and hide it behind a generic 500 message
fn store_failure(message: &str, err: WebServerError) -> WebServerError {
    logging::log_error(message, &err);
    WebServerError::internal(message)
}

fn parse_id(id: Result<Path<RecordId>, PathRejection>) -> WebServerResult<RecordId> {
    id.map(|Path(id)| id).map_err(|_| WebServerError::invalid_request(INVALID_ID))
}

/// Contact form submission - POST /api/contact
pub async fn submit_contact<S: RecordStore>(
    State(state): AppState<S>,
    payload: Result<Json<NewContactSubmission>, JsonRejection>,
) -> WebServerResult<Json<SubmissionReceipt>> {
    let Json(contact) = payload.map_err(|r| rejected_body(INVALID_CONTACT, r))?;
    contact.validate().map_err(|e| invalid_fields(INVALID_CONTACT, e))?;

    let record = state
        .store
        .create_contact(contact)
        .await
        .map_err(|e| store_failure("Failed to save contact data", e))?;

    info!(id = record.id, "📬 Contact submission stored");
    Ok(Json(SubmissionReceipt::new(record.id)))
}

/// Pickup scheduling - POST /api/pickup
pub async fn submit_pickup<S: RecordStore>(
    State(state): AppState<S>,
    payload: Result<Json<NewPickupRequest>, JsonRejection>,
) -> WebServerResult<Json<SubmissionReceipt>> {
    let Json(pickup) = payload.map_err(|r| rejected_body(INVALID_PICKUP, r))?;
    pickup.validate().map_err(|e| invalid_fields(INVALID_PICKUP, e))?;

    let record = state
        .store
        .create_pickup(pickup)
        .await
        .map_err(|e| store_failure("Failed to save pickup request", e))?;

    info!(id = record.id, date = %record.pickup_date, "🚚 Pickup request stored");
    Ok(Json(SubmissionReceipt::new(record.id)))
}

/// Quote calculation - POST /api/quote
///
/// Prices the shipment, stores the request with its cost, and returns both.
pub async fn submit_quote<S: RecordStore>(
    State(state): AppState<S>,
    payload: Result<Json<QuoteSubmission>, JsonRejection>,
) -> WebServerResult<Json<QuoteReceipt>> {
    let Json(submission) = payload.map_err(|r| rejected_body(INVALID_QUOTE, r))?;

    let quote = NewQuoteRequest {
        from_city: submission.from_city,
        to_city: submission.to_city,
        weight: submission.weight.into_text(),
        service_type: submission.service_type,
        estimated_cost: None,
    };
    quote.validate().map_err(|e| invalid_fields(INVALID_QUOTE, e))?;

    let estimated_cost =
        estimate_cost(&quote.weight, &quote.service_type).map_err(|e| invalid_fields(INVALID_QUOTE, e))?;

    let record = state
        .store
        .create_quote(NewQuoteRequest { estimated_cost: Some(estimated_cost), ..quote })
        .await
        .map_err(|e| store_failure("Failed to save quote request", e))?;

    info!(id = record.id, estimated_cost, "💰 Quote calculated");
    Ok(Json(QuoteReceipt { success: true, estimated_cost, id: record.id }))
}

/// Shipment tracking - GET /api/track/:trackingNumber
pub async fn track_shipment<S: RecordStore>(
    State(state): AppState<S>,
    Path(tracking_number): Path<String>,
) -> WebServerResult<Json<TrackingResponse>> {
    let record = state
        .store
        .get_tracking(&tracking_number)
        .await
        .map_err(|e| store_failure("Failed to fetch tracking data", e))?
        .ok_or_else(|| WebServerError::not_found("Tracking number"))?;

    let timeline = build_timeline(&record).to_vec();
    debug!(tracking_number = %record.tracking_number, status = %record.status, "Tracking lookup");
    Ok(Json(TrackingResponse::new(record, timeline)))
}

/// Stored contact submission - GET /api/contact/:id
pub async fn get_contact<S: RecordStore>(
    State(state): AppState<S>,
    id: Result<Path<RecordId>, PathRejection>,
) -> WebServerResult<Json<ContactSubmission>> {
    let id = parse_id(id)?;
    state
        .store
        .get_contact(id)
        .await
        .map_err(|e| store_failure("Failed to fetch contact submission", e))?
        .map(Json)
        .ok_or_else(|| WebServerError::not_found("Contact submission"))
}

/// Stored pickup request - GET /api/pickup/:id
pub async fn get_pickup<S: RecordStore>(
    State(state): AppState<S>,
    id: Result<Path<RecordId>, PathRejection>,
) -> WebServerResult<Json<PickupRequest>> {
    let id = parse_id(id)?;
    state
        .store
        .get_pickup(id)
        .await
        .map_err(|e| store_failure("Failed to fetch pickup request", e))?
        .map(Json)
        .ok_or_else(|| WebServerError::not_found("Pickup request"))
}

/// Stored quote request - GET /api/quote/:id
pub async fn get_quote<S: RecordStore>(
    State(state): AppState<S>,
    id: Result<Path<RecordId>, PathRejection>,
) -> WebServerResult<Json<QuoteRequest>> {
    let id = parse_id(id)?;
    state
        .store
        .get_quote(id)
        .await
        .map_err(|e| store_failure("Failed to fetch quote request", e))?
        .map(Json)
        .ok_or_else(|| WebServerError::not_found("Quote request"))
}

/// Health check endpoint
pub async fn health_check<S: RecordStore>(State(state): AppState<S>) -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "healthy".to_string(),
        store: state.store.backend_name().to_string(),
        uptime_seconds: state.get_uptime_seconds(),
        timestamp: Utc::now().timestamp(),
    })
}

/// Unknown API path
pub async fn not_found() -> WebServerError {
    WebServerError::not_found("Resource")
}
