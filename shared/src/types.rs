//! Core record types stored by the courier site backend
//!
//! Each record kind comes in two shapes: a `New*` value carrying the fields a
//! client submits, and the stored record with its store-assigned id and
//! timestamp.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::{SharedError, SharedResult};

/// Store-assigned record identifier
pub type RecordId = u64;

/// Reject blank required text fields
fn require(field: &'static str, value: &str) -> SharedResult<()> {
    if value.trim().is_empty() {
        return Err(SharedError::MissingField { field });
    }
    Ok(())
}

/// Delivery lifecycle of a tracked shipment, in progress order
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TrackingStatus {
    #[serde(rename = "Package Received")]
    PackageReceived,
    #[serde(rename = "In Transit")]
    InTransit,
    #[serde(rename = "Out for Delivery")]
    OutForDelivery,
    #[serde(rename = "Delivered")]
    Delivered,
}

impl TrackingStatus {
    pub const ALL: [TrackingStatus; 4] = [
        TrackingStatus::PackageReceived,
        TrackingStatus::InTransit,
        TrackingStatus::OutForDelivery,
        TrackingStatus::Delivered,
    ];

    /// Position in the lifecycle, starting at 0
    pub fn rank(self) -> usize {
        match self {
            TrackingStatus::PackageReceived => 0,
            TrackingStatus::InTransit => 1,
            TrackingStatus::OutForDelivery => 2,
            TrackingStatus::Delivered => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TrackingStatus::PackageReceived => "Package Received",
            TrackingStatus::InTransit => "In Transit",
            TrackingStatus::OutForDelivery => "Out for Delivery",
            TrackingStatus::Delivered => "Delivered",
        }
    }
}

impl fmt::Display for TrackingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TrackingStatus {
    type Err = SharedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TrackingStatus::ALL
            .into_iter()
            .find(|status| status.label() == s)
            .ok_or_else(|| SharedError::UnknownStatus { input: s.to_string() })
    }
}

/// Contact form fields as submitted
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewContactSubmission {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub service_type: String,
    pub message: String,
}

impl NewContactSubmission {
    pub fn validate(&self) -> SharedResult<()> {
        require("name", &self.name)?;
        require("phone", &self.phone)?;
        require("email", &self.email)?;
        require("serviceType", &self.service_type)?;
        require("message", &self.message)
    }

    pub fn into_record(self, id: RecordId, created_at: DateTime<Utc>) -> ContactSubmission {
        ContactSubmission {
            id,
            name: self.name,
            phone: self.phone,
            email: self.email,
            service_type: self.service_type,
            message: self.message,
            created_at,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmission {
    pub id: RecordId,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub service_type: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

/// Pickup scheduling fields as submitted
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPickupRequest {
    pub name: String,
    pub phone: String,
    pub address: String,
    pub package_size: String,
    pub pickup_date: String,
    pub preferred_time: String,
    #[serde(default)]
    pub instructions: Option<String>,
}

impl NewPickupRequest {
    pub fn validate(&self) -> SharedResult<()> {
        require("name", &self.name)?;
        require("phone", &self.phone)?;
        require("address", &self.address)?;
        require("packageSize", &self.package_size)?;
        require("pickupDate", &self.pickup_date)?;
        require("preferredTime", &self.preferred_time)
    }

    pub fn into_record(self, id: RecordId, created_at: DateTime<Utc>) -> PickupRequest {
        PickupRequest {
            id,
            name: self.name,
            phone: self.phone,
            address: self.address,
            package_size: self.package_size,
            pickup_date: self.pickup_date,
            preferred_time: self.preferred_time,
            instructions: self.instructions,
            created_at,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PickupRequest {
    pub id: RecordId,
    pub name: String,
    pub phone: String,
    pub address: String,
    pub package_size: String,
    pub pickup_date: String,
    pub preferred_time: String,
    pub instructions: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Quote request with its computed cost, ready to persist
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewQuoteRequest {
    pub from_city: String,
    pub to_city: String,
    pub weight: String,
    pub service_type: String,
    pub estimated_cost: Option<i64>,
}

impl NewQuoteRequest {
    pub fn validate(&self) -> SharedResult<()> {
        require("fromCity", &self.from_city)?;
        require("toCity", &self.to_city)?;
        require("weight", &self.weight)?;
        require("serviceType", &self.service_type)
    }

    pub fn into_record(self, id: RecordId, created_at: DateTime<Utc>) -> QuoteRequest {
        QuoteRequest {
            id,
            from_city: self.from_city,
            to_city: self.to_city,
            weight: self.weight,
            service_type: self.service_type,
            estimated_cost: self.estimated_cost,
            created_at,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRequest {
    pub id: RecordId,
    pub from_city: String,
    pub to_city: String,
    pub weight: String,
    pub service_type: String,
    pub estimated_cost: Option<i64>,
    pub created_at: DateTime<Utc>,
}

/// Tracking entry as provided by the dispatch side (or the seeder)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTrackingRecord {
    pub tracking_number: String,
    pub status: TrackingStatus,
    pub location: String,
    #[serde(default)]
    pub sender_name: Option<String>,
    #[serde(default)]
    pub receiver_name: Option<String>,
    #[serde(default)]
    pub package_weight: Option<String>,
    #[serde(default)]
    pub service_type: Option<String>,
    #[serde(default)]
    pub estimated_delivery: Option<String>,
}

impl NewTrackingRecord {
    pub fn validate(&self) -> SharedResult<()> {
        require("trackingNumber", &self.tracking_number)?;
        require("location", &self.location)
    }

    pub fn into_record(self, id: RecordId, last_update: DateTime<Utc>) -> TrackingRecord {
        TrackingRecord {
            id,
            tracking_number: self.tracking_number,
            status: self.status,
            location: self.location,
            last_update,
            sender_name: self.sender_name,
            receiver_name: self.receiver_name,
            package_weight: self.package_weight,
            service_type: self.service_type,
            estimated_delivery: self.estimated_delivery,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackingRecord {
    pub id: RecordId,
    pub tracking_number: String,
    pub status: TrackingStatus,
    pub location: String,
    pub last_update: DateTime<Utc>,
    pub sender_name: Option<String>,
    pub receiver_name: Option<String>,
    pub package_weight: Option<String>,
    pub service_type: Option<String>,
    pub estimated_delivery: Option<String>,
}

/// One stage of the delivery timeline shown to customers
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineStep {
    pub status: TrackingStatus,
    pub location: String,
    pub time: String,
    pub completed: bool,
}
