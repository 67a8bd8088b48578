//! Shared types for the courier site backend
//!
//! Record definitions, the tracking status lifecycle, domain errors and the
//! logging setup used by every crate in the workspace.

pub mod errors;
pub mod logging;
pub mod types;

pub use errors::*;
pub use types::*;
