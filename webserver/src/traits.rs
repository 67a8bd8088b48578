//! Service trait definitions for dependency injection
//!
//! Record persistence is abstracted behind `RecordStore` so handlers run the
//! same against the in-memory and the sled backend, and against mocks in tests.

use async_trait::async_trait;

use shared::{
    ContactSubmission, NewContactSubmission, NewPickupRequest, NewQuoteRequest, NewTrackingRecord,
    PickupRequest, QuoteRequest, RecordId, TrackingRecord,
};
use crate::error::WebServerResult;

/// Insert-and-lookup storage for the four record kinds
///
/// Inserts assign a strictly increasing id, unique within each kind, and stamp
/// the creation time. There is no update or delete.
#[mockall::automock]
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Short backend name for health reporting
    fn backend_name(&self) -> &'static str;

    async fn create_contact(&self, contact: NewContactSubmission) -> WebServerResult<ContactSubmission>;

    async fn get_contact(&self, id: RecordId) -> WebServerResult<Option<ContactSubmission>>;

    async fn create_pickup(&self, pickup: NewPickupRequest) -> WebServerResult<PickupRequest>;

    async fn get_pickup(&self, id: RecordId) -> WebServerResult<Option<PickupRequest>>;

    async fn create_quote(&self, quote: NewQuoteRequest) -> WebServerResult<QuoteRequest>;

    async fn get_quote(&self, id: RecordId) -> WebServerResult<Option<QuoteRequest>>;

    /// Fails with `DuplicateTrackingNumber` if the tracking number is taken
    async fn create_tracking(&self, tracking: NewTrackingRecord) -> WebServerResult<TrackingRecord>;

    /// Lookup by tracking number rather than numeric id
    async fn get_tracking(&self, tracking_number: &str) -> WebServerResult<Option<TrackingRecord>>;
}
