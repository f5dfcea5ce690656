//! Server error types

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use recipebox_core::StoreError;
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// Server error type
#[derive(Error, Debug)]
pub enum ServerError {
    /// Request body could not be decoded
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Unknown recipe or unmatched path
    #[error("Not found: {0}")]
    NotFound(String),

    /// Request body over the size limit
    #[error("Payload too large: {0}")]
    PayloadTooLarge(String),

    /// Path exists but not for this method
    #[error("Method not allowed: {0}")]
    MethodNotAllowed(String),

    /// Internal server error
    #[error("Internal error: {0}")]
    InternalError(#[from] anyhow::Error),
}

impl ServerError {
    pub fn status(&self) -> StatusCode {
        match self {
            ServerError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            ServerError::NotFound(_) => StatusCode::NOT_FOUND,
            ServerError::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            ServerError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            ServerError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status();
        let error_message = match self {
            ServerError::InvalidRequest(msg)
            | ServerError::NotFound(msg)
            | ServerError::MethodNotAllowed(msg)
            | ServerError::PayloadTooLarge(msg) => msg,
            // Details stay in the log, not in the response.
            ServerError::InternalError(err) => {
                error!("Internal error: {:#}", err);
                "Internal server error".to_string()
            }
        };

        let body = Json(json!({
            "error": error_message,
            "status": status.as_u16(),
        }));

        (status, body).into_response()
    }
}

impl From<StoreError> for ServerError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { .. } => ServerError::NotFound(err.to_string()),
        }
    }
}
