//! Service implementations
//!
//! Real implementations of the service traits for production use

pub mod memory_store;
pub mod seed;
pub mod sled_store;

#[cfg(test)]
mod tests;

// Re-export service implementations
pub use memory_store::MemoryRecordStore;
pub use seed::{sample_tracking_data, seed_tracking_data};
pub use sled_store::SledRecordStore;
