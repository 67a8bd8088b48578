//! Service tests for webserver

mod record_store;
