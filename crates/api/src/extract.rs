//! Request body extractors.

use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use inventory_core::error::CoreError;
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// JSON body extractor that ignores `Content-Type`.
///
/// Unlike [`axum::Json`], every failure (unreadable body, invalid JSON, a
/// payload that does not match `T`) is rejected the same way, with
/// [`CoreError::MalformedRequest`].
pub struct AssetJson<T>(pub T);

impl<T, S> FromRequest<S> for AssetJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|_| CoreError::MalformedRequest)?;

        let value = serde_json::from_slice(&bytes).map_err(|err| {
            tracing::debug!(error = %err, "Rejected request body");
            CoreError::MalformedRequest
        })?;

        Ok(AssetJson(value))
    }
}
