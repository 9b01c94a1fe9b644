//! Custom Axum extractors

use std::convert::Infallible;

use axum::body::Bytes;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::http::StatusCode;
use serde_json::{Map, Value};

use super::error::ApiError;
use crate::models::ValidationError;

/// Row id from the `{id}` path segment.
///
/// `None` when the segment is not a 64-bit integer. Such an id can match no
/// row, so handlers answer it with their not-found response.
pub struct RowId(pub Option<i64>);

impl<S> FromRequestParts<S> for RowId
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let id = Path::<String>::from_request_parts(parts, state)
            .await
            .ok()
            .and_then(|Path(raw)| raw.parse::<i64>().ok());

        Ok(Self(id))
    }
}

/// Request body as a JSON object.
///
/// An empty body or a JSON value that is not an object yields an empty map,
/// so validation reports the required fields. Unparseable JSON is rejected,
/// and bodies over the default body limit get a 413.
/// The content type is not checked.
pub struct JsonObject(pub Map<String, Value>);

impl<S> FromRequest<S> for JsonObject
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| match rejection.status() {
                StatusCode::PAYLOAD_TOO_LARGE => ApiError::PayloadTooLarge,
                _ => ApiError::Validation(ValidationError::MalformedBody),
            })?;

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self(Map::new()));
        }

        match serde_json::from_slice::<Value>(&bytes) {
            Ok(Value::Object(map)) => Ok(Self(map)),
            Ok(_) => Ok(Self(Map::new())),
            Err(_) => Err(ApiError::Validation(ValidationError::MalformedBody)),
        }
    }
}
