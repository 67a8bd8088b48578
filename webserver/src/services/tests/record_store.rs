//! Behaviour every RecordStore backend must share
//!
//! Each check is written once against `&dyn RecordStore` and run for both the
//! memory and the sled backend.

use super::fixtures::*;
use crate::error::WebServerError;
use crate::services::{MemoryRecordStore, SledRecordStore};
use crate::traits::RecordStore;
use shared::{SharedError, TrackingStatus};

async fn contact_round_trip(store: &dyn RecordStore) {
    let created = store.create_contact(sample_contact()).await.unwrap();
    let fetched = store.get_contact(created.id).await.unwrap().expect("contact stored");

    assert_eq!(fetched, created);
    assert_eq!(fetched.name, "Priya Sharma");
    assert_eq!(fetched.email, "priya@example.com");
}

async fn pickup_round_trip(store: &dyn RecordStore) {
    let created = store.create_pickup(sample_pickup()).await.unwrap();
    let fetched = store.get_pickup(created.id).await.unwrap().expect("pickup stored");

    assert_eq!(fetched, created);
    assert_eq!(fetched.instructions.as_deref(), Some("Ring the back door bell"));
}

async fn quote_keeps_estimated_cost(store: &dyn RecordStore) {
    let created = store.create_quote(sample_quote()).await.unwrap();
    let fetched = store.get_quote(created.id).await.unwrap().expect("quote stored");

    assert_eq!(fetched.estimated_cost, Some(300));
    assert_eq!(fetched.weight, "2");
}

async fn ids_strictly_increase(store: &dyn RecordStore) {
    let mut last = 0;
    for _ in 0..5 {
        let contact = store.create_contact(sample_contact()).await.unwrap();
        assert!(contact.id > last, "id {} did not increase past {}", contact.id, last);
        last = contact.id;
    }
}

async fn missing_records_are_none(store: &dyn RecordStore) {
    assert!(store.get_contact(9_999).await.unwrap().is_none());
    assert!(store.get_pickup(9_999).await.unwrap().is_none());
    assert!(store.get_quote(9_999).await.unwrap().is_none());
    assert!(store.get_tracking("UNKNOWN123").await.unwrap().is_none());
}

async fn tracking_lookup_by_number(store: &dyn RecordStore) {
    let created = store.create_tracking(sample_tracking("TRK001234567")).await.unwrap();
    let fetched = store.get_tracking("TRK001234567").await.unwrap().expect("tracking stored");

    assert_eq!(fetched, created);
    assert_eq!(fetched.status, TrackingStatus::InTransit);
}

async fn duplicate_tracking_number_rejected(store: &dyn RecordStore) {
    let original = store.create_tracking(sample_tracking("6861417")).await.unwrap();

    let mut duplicate = sample_tracking("6861417");
    duplicate.status = TrackingStatus::Delivered;
    let err = store.create_tracking(duplicate).await.unwrap_err();
    assert!(matches!(
        err,
        WebServerError::DuplicateTrackingNumber { ref tracking_number } if tracking_number == "6861417"
    ));

    // The first record is untouched
    let stored = store.get_tracking("6861417").await.unwrap().unwrap();
    assert_eq!(stored, original);
}

async fn blank_tracking_number_rejected(store: &dyn RecordStore) {
    let err = store.create_tracking(sample_tracking("")).await.unwrap_err();
    assert!(matches!(
        err,
        WebServerError::SharedError(SharedError::MissingField { field: "trackingNumber" })
    ));
    assert!(store.get_tracking("").await.unwrap().is_none());

    let mut nowhere = sample_tracking("UOC555000111");
    nowhere.location = "   ".to_string();
    assert!(store.create_tracking(nowhere).await.is_err());
    assert!(store.get_tracking("UOC555000111").await.unwrap().is_none());
}

async fn run_contract(store: &dyn RecordStore) {
    contact_round_trip(store).await;
    pickup_round_trip(store).await;
    quote_keeps_estimated_cost(store).await;
    ids_strictly_increase(store).await;
    missing_records_are_none(store).await;
    tracking_lookup_by_number(store).await;
    duplicate_tracking_number_rejected(store).await;
    blank_tracking_number_rejected(store).await;
}

#[tokio::test]
async fn test_memory_store_contract() {
    run_contract(&MemoryRecordStore::new()).await;
}

#[tokio::test]
async fn test_sled_store_contract() {
    run_contract(&SledRecordStore::temporary().unwrap()).await;
}
