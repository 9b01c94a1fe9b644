//! API error types with IntoResponse
//!
//! Errors are converted to JSON responses with appropriate status codes.
//! Validation and storage failures use an `error` key, not-found uses `message`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::db::repos::DbError;
use crate::models::{Lookup, Operation, Resource, ValidationError};

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Validation failed (400)
    Validation(ValidationError),

    /// Id matched no row (404)
    NotFound { resource: Resource, lookup: Lookup },

    /// Body exceeds the configured limit (413)
    PayloadTooLarge,

    /// Storage failed (500, logged)
    Storage {
        resource: Resource,
        operation: Operation,
        source: DbError,
    },
}

impl ApiError {
    pub fn not_found(resource: Resource, lookup: Lookup) -> Self {
        Self::NotFound { resource, lookup }
    }

    /// Adapter for `map_err` on store calls.
    pub fn storage(resource: Resource, operation: Operation) -> impl FnOnce(DbError) -> Self {
        move |source| Self::Storage {
            resource,
            operation,
            source,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            Self::Storage { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match &self {
            Self::Validation(e) => json!({ "error": e.to_string() }),
            Self::NotFound { resource, lookup } => {
                json!({ "message": lookup.not_found_message(*resource) })
            }
            Self::PayloadTooLarge => json!({ "error": "Request body too large." }),
            Self::Storage {
                resource,
                operation,
                source,
            } => {
                // Log the actual error, return generic message
                tracing::error!(
                    resource = resource.name(),
                    operation = operation.as_str(),
                    error = %source,
                    "storage error"
                );
                json!({ "error": operation.storage_error_message(*resource) })
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use serde_json::Value;

    async fn body_json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body read");
        serde_json::from_slice(&bytes).expect("json body")
    }

    #[tokio::test]
    async fn validation_error_is_400() {
        let err = ApiError::Validation(ValidationError::MissingFields {
            required: &["username", "email", "password"],
        });
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            json!({ "error": "Username, email, and password are required." })
        );
    }

    #[tokio::test]
    async fn not_found_is_404_with_message_key() {
        let response = ApiError::not_found(Resource::User, Lookup::Get).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await, json!({ "message": "User not found" }));
    }

    #[tokio::test]
    async fn payload_too_large_is_413() {
        let response = ApiError::PayloadTooLarge.into_response();
        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(
            body_json(response).await,
            json!({ "error": "Request body too large." })
        );
    }

    #[tokio::test]
    async fn storage_error_hides_details() {
        let err = ApiError::storage(Resource::Product, Operation::Create)(DbError::Sqlx(
            sqlx::Error::Protocol("syntax error at or near \"INSERT\"".into()),
        ));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert_eq!(body, json!({ "error": "Error creating product" }));
        assert!(!body.to_string().contains("syntax"));
    }
}
