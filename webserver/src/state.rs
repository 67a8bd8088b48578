//! Webserver state management
//!
//! State shared by every request handler: the record store chosen at startup
//! and the process start time.

use std::time::Instant;

use crate::traits::RecordStore;

/// Core webserver state, held behind an `Arc` by the router
#[derive(Debug)]
pub struct WebServerState<S> {
    pub store: S,
    pub server_start_time: Instant,
}

impl<S: RecordStore> WebServerState<S> {
    /// Create a new webserver state around a store
    pub fn new(store: S) -> Self {
        Self {
            store,
            server_start_time: Instant::now(),
        }
    }

    /// Get server uptime in seconds
    pub fn get_uptime_seconds(&self) -> u64 {
        self.server_start_time.elapsed().as_secs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::MemoryRecordStore;

    #[tokio::test]
    async fn test_webserver_state_creation() {
        let state = WebServerState::new(MemoryRecordStore::new());

        assert_eq!(state.store.backend_name(), "memory");
        assert_eq!(state.get_uptime_seconds(), 0);
    }
}
