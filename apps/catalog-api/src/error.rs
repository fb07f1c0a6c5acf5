//! # API Error Type
//!
//! Unified error type for HTTP handlers.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Catalog API                        │
//! │                                                                         │
//! │  Handler → Result<T, ApiError>                                         │
//! │                                                                         │
//! │  JsonRejection / PathRejection ──────────────► 400                     │
//! │  ValidationError (bookstore-core) ───────────► 400                     │
//! │  CoreError::BookNotFound ────────────────────► 404                     │
//! │  DbError::NotFound ──────────────────────────► 404                     │
//! │  any other DbError ──────────────────────────► 500 (logged)            │
//! │                                                                         │
//! │  Response body: {"error": "<message>"}                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use bookstore_core::{CoreError, ValidationError};
use bookstore_db::DbError;
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;

/// Message returned for every missing-book response.
pub const BOOK_NOT_FOUND: &str = "book not found";

/// API error returned from handlers.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiError {
    /// HTTP status to respond with
    pub status: StatusCode,

    /// Human-readable message, sent as `{"error": message}`
    pub message: String,
}

/// Error response body.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        ApiError {
            status,
            message: message.into(),
        }
    }

    /// 400 Bad Request.
    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError::new(StatusCode::BAD_REQUEST, message)
    }

    /// 404 for a missing book.
    pub fn book_not_found() -> Self {
        ApiError::new(StatusCode::NOT_FOUND, BOOK_NOT_FOUND)
    }

    /// 500 Internal Server Error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            error!(status = %self.status, error = %self.message, "Request failed");
        }

        let body = Json(ErrorResponse {
            error: self.message,
        });
        (self.status, body).into_response()
    }
}

/// Converts database errors to API errors.
impl From<DbError> for ApiError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::NotFound { .. } => ApiError::book_not_found(),
            other => ApiError::internal(other.to_string()),
        }
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::BookNotFound(_) => ApiError::book_not_found(),
            CoreError::Validation(e) => ApiError::from(e),
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::bad_request(err.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::bad_request(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::bad_request(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::bad_request(rejection.body_text())
    }
}

/// Result alias for handlers.
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_db_not_found_maps_to_404() {
        let err = ApiError::from(DbError::not_found("Book", 7));
        assert_eq!(err.status, StatusCode::NOT_FOUND);
        assert_eq!(err.message, "book not found");
    }

    #[test]
    fn test_store_failures_map_to_500_with_message() {
        let err = ApiError::from(DbError::ConstraintViolation {
            message: "null value in column \"title\"".to_string(),
        });
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(err.message.contains("title"));

        let err = ApiError::from(DbError::PoolExhausted);
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_validation_maps_to_400() {
        let err = ApiError::from(CoreError::from(ValidationError::Required {
            field: "title".to_string(),
        }));
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.message, "title is required");
    }

    #[test]
    fn test_core_not_found_maps_to_404() {
        let err = ApiError::from(CoreError::BookNotFound(3));
        assert_eq!(err, ApiError::book_not_found());
    }
}
