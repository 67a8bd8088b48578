//! Durable record store on sled
//!
//! One tree per record kind. Submissions are keyed by their big-endian id so
//! trees iterate in insertion order; tracking records are keyed by tracking
//! number. Values are bincode-encoded records.

use async_trait::async_trait;
use chrono::Utc;
use serde::{Serialize, de::DeserializeOwned};
use std::path::Path;

use shared::{
    ContactSubmission, NewContactSubmission, NewPickupRequest, NewQuoteRequest, NewTrackingRecord,
    PickupRequest, QuoteRequest, RecordId, TrackingRecord,
};
use crate::error::{WebServerError, WebServerResult};
use crate::traits::RecordStore;

const CONTACTS_TREE: &str = "contact_submissions";
const PICKUPS_TREE: &str = "pickup_requests";
const QUOTES_TREE: &str = "quote_requests";
const TRACKING_TREE: &str = "tracking_data";

#[derive(Clone)]
pub struct SledRecordStore {
    db: sled::Db,
    contacts: sled::Tree,
    pickups: sled::Tree,
    quotes: sled::Tree,
    tracking: sled::Tree,
}

impl SledRecordStore {
    /// Open (or create) the database under `path`
    pub fn open<P: AsRef<Path>>(path: P) -> WebServerResult<Self> {
        let db = sled::open(path)?;
        Self::from_db(db)
    }

    /// Throwaway database that is removed when dropped
    pub fn temporary() -> WebServerResult<Self> {
        let db = sled::Config::new().temporary(true).open()?;
        Self::from_db(db)
    }

    fn from_db(db: sled::Db) -> WebServerResult<Self> {
        Ok(Self {
            contacts: db.open_tree(CONTACTS_TREE)?,
            pickups: db.open_tree(PICKUPS_TREE)?,
            quotes: db.open_tree(QUOTES_TREE)?,
            tracking: db.open_tree(TRACKING_TREE)?,
            db,
        })
    }

    /// Monotonic across restarts; starts at 1
    fn allocate_id(&self) -> WebServerResult<RecordId> {
        Ok(self.db.generate_id()? + 1)
    }

    pub async fn flush(&self) -> WebServerResult<()> {
        self.db.flush_async().await?;
        Ok(())
    }
}

fn encode<T: Serialize>(record: &T) -> WebServerResult<Vec<u8>> {
    Ok(bincode::serialize(record)?)
}

fn decode<T: DeserializeOwned>(bytes: Option<sled::IVec>) -> WebServerResult<Option<T>> {
    bytes.map(|raw| bincode::deserialize(&raw)).transpose().map_err(WebServerError::from)
}

fn insert_by_id<T: Serialize>(tree: &sled::Tree, id: RecordId, record: &T) -> WebServerResult<()> {
    tree.insert(id.to_be_bytes(), encode(record)?)?;
    Ok(())
}

fn get_by_id<T: DeserializeOwned>(tree: &sled::Tree, id: RecordId) -> WebServerResult<Option<T>> {
    decode(tree.get(id.to_be_bytes())?)
}

#[async_trait]
impl RecordStore for SledRecordStore {
    fn backend_name(&self) -> &'static str {
        "sled"
    }

    async fn create_contact(&self, contact: NewContactSubmission) -> WebServerResult<ContactSubmission> {
        let record = contact.into_record(self.allocate_id()?, Utc::now());
        insert_by_id(&self.contacts, record.id, &record)?;
        Ok(record)
    }

    async fn get_contact(&self, id: RecordId) -> WebServerResult<Option<ContactSubmission>> {
        get_by_id(&self.contacts, id)
    }

    async fn create_pickup(&self, pickup: NewPickupRequest) -> WebServerResult<PickupRequest> {
        let record = pickup.into_record(self.allocate_id()?, Utc::now());
        insert_by_id(&self.pickups, record.id, &record)?;
        Ok(record)
    }

    async fn get_pickup(&self, id: RecordId) -> WebServerResult<Option<PickupRequest>> {
        get_by_id(&self.pickups, id)
    }

    async fn create_quote(&self, quote: NewQuoteRequest) -> WebServerResult<QuoteRequest> {
        let record = quote.into_record(self.allocate_id()?, Utc::now());
        insert_by_id(&self.quotes, record.id, &record)?;
        Ok(record)
    }

    async fn get_quote(&self, id: RecordId) -> WebServerResult<Option<QuoteRequest>> {
        get_by_id(&self.quotes, id)
    }

    async fn create_tracking(&self, tracking: NewTrackingRecord) -> WebServerResult<TrackingRecord> {
        tracking.validate()?;
        let record = tracking.into_record(self.allocate_id()?, Utc::now());
        let key = record.tracking_number.as_bytes();

        // Only succeeds if the key is currently absent.
        let swapped = self
            .tracking
            .compare_and_swap(key, None as Option<&[u8]>, Some(encode(&record)?))?;
        if swapped.is_err() {
            return Err(WebServerError::DuplicateTrackingNumber {
                tracking_number: record.tracking_number,
            });
        }
        Ok(record)
    }

    async fn get_tracking(&self, tracking_number: &str) -> WebServerResult<Option<TrackingRecord>> {
        decode(self.tracking.get(tracking_number.as_bytes())?)
    }
}
