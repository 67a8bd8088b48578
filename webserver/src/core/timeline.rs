//! Delivery timeline synthesis
//!
//! Builds the fixed four-stage timeline for a tracking record. A stage is
//! completed once the record's status has reached it.

use shared::{TimelineStep, TrackingRecord, TrackingStatus};

pub const ORIGIN_FACILITY: &str = "Gurgaon Sorting Facility";
pub const LOCAL_DELIVERY_CENTER: &str = "Local Delivery Center";
pub const DESTINATION: &str = "Destination Address";
pub const DEFAULT_ESTIMATE: &str = "Tomorrow";

const RECEIVED_AT: &str = "2024-12-19 10:30 AM";
const IN_TRANSIT_AT: &str = "2024-12-19 02:45 PM";
const OUT_FOR_DELIVERY_AT: &str = "2024-12-20 09:15 AM";
const DELIVERED_AT: &str = "2024-12-20 06:00 PM";

/// Build the four timeline steps for a record, in lifecycle order
pub fn build_timeline(record: &TrackingRecord) -> [TimelineStep; 4] {
    let current = record.status;
    let step = |status: TrackingStatus, location: &str, time: String| TimelineStep {
        status,
        location: location.to_string(),
        time,
        completed: current.rank() >= status.rank(),
    };

    let out_for_delivery_location = if current == TrackingStatus::OutForDelivery {
        record.location.as_str()
    } else {
        LOCAL_DELIVERY_CENTER
    };

    let out_for_delivery_time = match current {
        TrackingStatus::Delivered => OUT_FOR_DELIVERY_AT.to_string(),
        TrackingStatus::OutForDelivery => "Today 09:15 AM".to_string(),
        _ => "Expected: Today".to_string(),
    };

    let delivered_time = match current {
        TrackingStatus::Delivered => DELIVERED_AT.to_string(),
        _ => format!(
            "Expected: {}",
            record.estimated_delivery.as_deref().unwrap_or(DEFAULT_ESTIMATE)
        ),
    };

    [
        step(TrackingStatus::PackageReceived, ORIGIN_FACILITY, RECEIVED_AT.to_string()),
        step(TrackingStatus::InTransit, &record.location, IN_TRANSIT_AT.to_string()),
        step(TrackingStatus::OutForDelivery, out_for_delivery_location, out_for_delivery_time),
        step(TrackingStatus::Delivered, DESTINATION, delivered_time),
    ]
}
