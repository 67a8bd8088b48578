//! Shared error types for the courier site backend

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SharedError {
    #[error("Invalid weight: {input:?}")]
    InvalidWeight { input: String },

    #[error("Unknown tracking status: {input}")]
    UnknownStatus { input: String },

    #[error("Missing required field: {field}")]
    MissingField { field: &'static str },
}

pub type SharedResult<T> = Result<T, SharedError>;
