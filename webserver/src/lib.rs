//! Webserver library for the courier site backend
//!
//! Serves the JSON API behind the site's contact, pickup, quote and tracking
//! forms, over a record store chosen at startup.

pub mod config;
pub mod core;
pub mod error;
pub mod services;
pub mod state;
pub mod traits;
pub mod types;
pub mod web;
pub mod webserver_impl;

// Re-export main types
pub use config::{ServerConfig, StoreBackend};
pub use error::{WebServerError, WebServerResult};
pub use state::WebServerState;
pub use types::*;
pub use webserver_impl::WebServer;

// Re-export trait definitions
pub use traits::RecordStore;

// Re-export service implementations
pub use services::{MemoryRecordStore, SledRecordStore};
