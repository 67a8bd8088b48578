//! In-memory record store
//!
//! Lives for the process lifetime. One id counter is shared by every record
//! kind, so ids are unique across kinds as well as within them.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::RwLock;

use shared::{
    ContactSubmission, NewContactSubmission, NewPickupRequest, NewQuoteRequest, NewTrackingRecord,
    PickupRequest, QuoteRequest, RecordId, TrackingRecord,
};
use crate::error::{WebServerError, WebServerResult};
use crate::traits::RecordStore;

#[derive(Debug)]
pub struct MemoryRecordStore {
    next_id: AtomicU64,
    contacts: RwLock<HashMap<RecordId, ContactSubmission>>,
    pickups: RwLock<HashMap<RecordId, PickupRequest>>,
    quotes: RwLock<HashMap<RecordId, QuoteRequest>>,
    tracking: RwLock<HashMap<String, TrackingRecord>>,
}

impl MemoryRecordStore {
    pub fn new() -> Self {
        Self {
            next_id: AtomicU64::new(1),
            contacts: RwLock::new(HashMap::new()),
            pickups: RwLock::new(HashMap::new()),
            quotes: RwLock::new(HashMap::new()),
            tracking: RwLock::new(HashMap::new()),
        }
    }

    fn allocate_id(&self) -> RecordId {
        self.next_id.fetch_add(1, Ordering::Relaxed)
    }
}

impl Default for MemoryRecordStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RecordStore for MemoryRecordStore {
    fn backend_name(&self) -> &'static str {
        "memory"
    }

    async fn create_contact(&self, contact: NewContactSubmission) -> WebServerResult<ContactSubmission> {
        let record = contact.into_record(self.allocate_id(), Utc::now());
        self.contacts.write().await.insert(record.id, record.clone());
        Ok(record)
    }

    async fn get_contact(&self, id: RecordId) -> WebServerResult<Option<ContactSubmission>> {
        Ok(self.contacts.read().await.get(&id).cloned())
    }

    async fn create_pickup(&self, pickup: NewPickupRequest) -> WebServerResult<PickupRequest> {
        let record = pickup.into_record(self.allocate_id(), Utc::now());
        self.pickups.write().await.insert(record.id, record.clone());
        Ok(record)
    }

    async fn get_pickup(&self, id: RecordId) -> WebServerResult<Option<PickupRequest>> {
        Ok(self.pickups.read().await.get(&id).cloned())
    }

    async fn create_quote(&self, quote: NewQuoteRequest) -> WebServerResult<QuoteRequest> {
        let record = quote.into_record(self.allocate_id(), Utc::now());
        self.quotes.write().await.insert(record.id, record.clone());
        Ok(record)
    }

    async fn get_quote(&self, id: RecordId) -> WebServerResult<Option<QuoteRequest>> {
        Ok(self.quotes.read().await.get(&id).cloned())
    }

    async fn create_tracking(&self, tracking: NewTrackingRecord) -> WebServerResult<TrackingRecord> {
        tracking.validate()?;

        // Hold the write lock across the check so two inserts cannot both pass it.
        let mut records = self.tracking.write().await;
        if records.contains_key(&tracking.tracking_number) {
            return Err(WebServerError::DuplicateTrackingNumber {
                tracking_number: tracking.tracking_number,
            });
        }

        let record = tracking.into_record(self.allocate_id(), Utc::now());
        records.insert(record.tracking_number.clone(), record.clone());
        Ok(record)
    }

    async fn get_tracking(&self, tracking_number: &str) -> WebServerResult<Option<TrackingRecord>> {
        Ok(self.tracking.read().await.get(tracking_number).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::tests::fixtures::*;

    #[tokio::test]
    async fn test_ids_increase_across_kinds() {
        let store = MemoryRecordStore::new();

        let contact = store.create_contact(sample_contact()).await.unwrap();
        let pickup = store.create_pickup(sample_pickup()).await.unwrap();
        let quote = store.create_quote(sample_quote()).await.unwrap();

        assert_eq!(contact.id, 1);
        assert!(pickup.id > contact.id);
        assert!(quote.id > pickup.id);
    }

    #[tokio::test]
    async fn test_backend_name() {
        assert_eq!(MemoryRecordStore::new().backend_name(), "memory");
    }
}
