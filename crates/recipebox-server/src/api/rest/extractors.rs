//! Custom extractors
//!
//! Provides a JSON body extractor with the service's error mapping.

use crate::error::ServerError;
use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::StatusCode,
};
use serde::de::DeserializeOwned;

/// JSON body extractor
///
/// Unlike `axum::Json` it ignores the `Content-Type` header. A body over a
/// configured size limit is 413, any other body that cannot be read is an
/// internal error, and a body that is not valid JSON for `T` is a client
/// error.
pub struct JsonExtractor<T>(pub T);

#[axum::async_trait]
impl<S, T> FromRequest<S> for JsonExtractor<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ServerError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| match rejection.status() {
                StatusCode::PAYLOAD_TOO_LARGE => {
                    ServerError::PayloadTooLarge(rejection.body_text())
                }
                _ => ServerError::InternalError(anyhow::anyhow!(
                    "Failed to read request body: {}",
                    rejection.body_text()
                )),
            })?;

        serde_json::from_slice(&bytes)
            .map(JsonExtractor)
            .map_err(|err| ServerError::InvalidRequest(format!("Invalid JSON: {}", err)))
    }
}
