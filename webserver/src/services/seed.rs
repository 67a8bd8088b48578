//! Sample tracking data loaded at startup
//!
//! Seeding is idempotent: tracking numbers that already exist are skipped, so
//! restarting against a durable store does not fail or duplicate records.

use shared::{NewTrackingRecord, TrackingStatus, logging};
use tracing::debug;

use crate::error::{WebServerError, WebServerResult};
use crate::traits::RecordStore;

/// One demo shipment as it appears in the seed table
struct SampleShipment {
    tracking_number: &'static str,
    status: TrackingStatus,
    location: &'static str,
    sender: &'static str,
    receiver: &'static str,
    weight: &'static str,
    service: &'static str,
    estimated_delivery: &'static str,
}

impl From<&SampleShipment> for NewTrackingRecord {
    fn from(sample: &SampleShipment) -> Self {
        NewTrackingRecord {
            tracking_number: sample.tracking_number.to_string(),
            status: sample.status,
            location: sample.location.to_string(),
            sender_name: Some(sample.sender.to_string()),
            receiver_name: Some(sample.receiver.to_string()),
            package_weight: Some(sample.weight.to_string()),
            service_type: Some(sample.service.to_string()),
            estimated_delivery: Some(sample.estimated_delivery.to_string()),
        }
    }
}

// One shipment per lifecycle stage, plus a second one in transit
const SAMPLE_SHIPMENTS: [SampleShipment; 5] = [
    SampleShipment {
        tracking_number: "UOC123456789",
        status: TrackingStatus::InTransit,
        location: "Delhi Hub",
        sender: "Rajesh Kumar",
        receiver: "Priya Sharma",
        weight: "2.5 kg",
        service: "Express Delivery",
        estimated_delivery: "2024-12-22",
    },
    SampleShipment {
        tracking_number: "6861417",
        status: TrackingStatus::OutForDelivery,
        location: "Mumbai Delivery Center",
        sender: "Amit Patel",
        receiver: "Sunita Verma",
        weight: "1.2 kg",
        service: "Standard Delivery",
        estimated_delivery: "2024-12-21",
    },
    SampleShipment {
        tracking_number: "6861380",
        status: TrackingStatus::Delivered,
        location: "Destination Address",
        sender: "Global Exports Ltd",
        receiver: "Tech Solutions Inc",
        weight: "5.0 kg",
        service: "International Delivery",
        estimated_delivery: "2024-12-20",
    },
    SampleShipment {
        tracking_number: "UOC987654321",
        status: TrackingStatus::PackageReceived,
        location: "Gurgaon Sorting Facility",
        sender: "E-Commerce Plus",
        receiver: "Neha Singh",
        weight: "0.8 kg",
        service: "Same Day Delivery",
        estimated_delivery: "2024-12-21",
    },
    SampleShipment {
        tracking_number: "TRK001234567",
        status: TrackingStatus::InTransit,
        location: "Bangalore Hub",
        sender: "TechnoSoft Solutions",
        receiver: "Digital Marketing Co",
        weight: "3.2 kg",
        service: "Express Delivery",
        estimated_delivery: "2024-12-23",
    },
];

/// The fixed demo shipments as insertable records
pub fn sample_tracking_data() -> Vec<NewTrackingRecord> {
    SAMPLE_SHIPMENTS.iter().map(NewTrackingRecord::from).collect()
}

/// Insert the sample shipments, returning how many were new
pub async fn seed_tracking_data<S: RecordStore + ?Sized>(store: &S) -> WebServerResult<usize> {
    let mut inserted = 0;
    for record in sample_tracking_data() {
        match store.create_tracking(record).await {
            Ok(_) => inserted += 1,
            Err(WebServerError::DuplicateTrackingNumber { tracking_number }) => {
                debug!("Tracking number {} already present, skipping", tracking_number);
            }
            Err(e) => return Err(e),
        }
    }

    logging::log_success(&format!("Seeded {inserted} tracking records"));
    Ok(inserted)
}
