//! Core business logic modules
//!
//! Pure business logic with no I/O dependencies

pub mod pricing;
pub mod timeline;

// Re-export commonly used items
pub use pricing::{ServiceTier, estimate_cost};
pub use timeline::build_timeline;
