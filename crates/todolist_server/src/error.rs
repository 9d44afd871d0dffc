//! API error mapping.
//!
//! # Responsibility
//! - Recover storage errors into HTTP status codes at the transport boundary.
//!
//! # Invariants
//! - `StorageError::NotFound` maps to 404, `StorageError::Unexpected` to 500.
//! - Error responses carry empty bodies; the underlying cause is logged when
//!   the response is produced and never sent to clients.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use todolist_core::{StorageError, TodoId, UnexpectedError};

/// Transport-level error carrying the response classification and cause.
#[derive(Debug)]
pub enum ApiError {
    /// Malformed path parameter or request body.
    BadRequest,
    /// Targeted record does not exist.
    NotFound(TodoId),
    /// Infrastructure failure; details stay server-side.
    Internal(UnexpectedError),
}

impl From<StorageError> for ApiError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::NotFound(id) => Self::NotFound(id),
            StorageError::Unexpected(cause) => Self::Internal(cause),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::BadRequest => StatusCode::BAD_REQUEST,
            Self::NotFound(id) => {
                log::info!("event=api_error module=server status=not_found id={id}");
                StatusCode::NOT_FOUND
            }
            Self::Internal(cause) => {
                log::error!("event=api_error module=server status=unexpected error={cause}");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        status.into_response()
    }
}
