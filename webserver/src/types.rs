//! Type definitions for webserver
//!
//! Request and response bodies of the JSON API that are not stored records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared::{RecordId, TimelineStep, TrackingRecord, TrackingStatus};

/// Weight as sent by the quote form: the form posts text, scripted clients
/// often send a bare number.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum WeightInput {
    Text(String),
    Number(f64),
}

impl WeightInput {
    pub fn into_text(self) -> String {
        match self {
            WeightInput::Text(text) => text,
            WeightInput::Number(number) => number.to_string(),
        }
    }
}

/// Body of `POST /api/quote`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteSubmission {
    pub from_city: String,
    pub to_city: String,
    pub weight: WeightInput,
    pub service_type: String,
}

/// Reply to a stored contact or pickup submission
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmissionReceipt {
    pub success: bool,
    pub id: RecordId,
}

impl SubmissionReceipt {
    pub fn new(id: RecordId) -> Self {
        Self { success: true, id }
    }
}

/// Reply to a priced quote
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteReceipt {
    pub success: bool,
    pub estimated_cost: i64,
    pub id: RecordId,
}

/// Tracking lookup result: the record's public fields plus its timeline
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackingResponse {
    pub tracking_number: String,
    pub status: TrackingStatus,
    pub location: String,
    pub last_update: DateTime<Utc>,
    pub sender_name: Option<String>,
    pub receiver_name: Option<String>,
    pub package_weight: Option<String>,
    pub service_type: Option<String>,
    pub estimated_delivery: Option<String>,
    pub timeline: Vec<TimelineStep>,
}

impl TrackingResponse {
    pub fn new(record: TrackingRecord, timeline: Vec<TimelineStep>) -> Self {
        Self {
            tracking_number: record.tracking_number,
            status: record.status,
            location: record.location,
            last_update: record.last_update,
            sender_name: record.sender_name,
            receiver_name: record.receiver_name,
            package_weight: record.package_weight,
            service_type: record.service_type,
            estimated_delivery: record.estimated_delivery,
            timeline,
        }
    }
}

/// Health check body
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthStatus {
    pub status: String,
    pub store: String,
    pub uptime_seconds: u64,
    pub timestamp: i64,
}
