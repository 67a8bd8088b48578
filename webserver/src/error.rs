//! WebServer-specific error types

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;
use shared::SharedError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WebServerError {
    #[error("{details}")]
    InvalidRequest { details: String },

    #[error("{what} not found")]
    NotFound { what: String },

    #[error("Tracking number already exists: {tracking_number}")]
    DuplicateTrackingNumber { tracking_number: String },

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("{0}")]
    Internal(String),

    #[error("Server startup error: {0}")]
    ServerStartup(String),

    #[error("Shared component error: {0}")]
    SharedError(#[from] SharedError),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Record encoding error: {0}")]
    EncodingError(#[from] bincode::Error),
}

impl WebServerError {
    pub fn invalid_request(details: impl Into<String>) -> Self {
        Self::InvalidRequest { details: details.into() }
    }

    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound { what: what.into() }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidRequest { .. } | Self::SharedError(_) => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::DuplicateTrackingNumber { .. } => StatusCode::CONFLICT,
            Self::Storage(_)
            | Self::Internal(_)
            | Self::ServerStartup(_)
            | Self::IoError(_)
            | Self::EncodingError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<sled::Error> for WebServerError {
    fn from(err: sled::Error) -> Self {
        Self::Storage(err.to_string())
    }
}

/// Errors render as `{"error": "..."}` with the matching status code
impl IntoResponse for WebServerError {
    fn into_response(self) -> Response {
        (self.status_code(), Json(json!({ "error": self.to_string() }))).into_response()
    }
}

pub type WebServerResult<T> = Result<T, WebServerError>;
