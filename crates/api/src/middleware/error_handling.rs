//! # Error Handling Middleware
//!
//! Maps domain errors to HTTP responses with a stable, machine-readable
//! error code, so every endpoint reports failures the same way.
//!
//! `SlotConflict` deserves a note: it is the one error expected under
//! normal concurrent load (two users racing for the same slot) and maps to
//! 409 so clients know to re-query the slot list and retry. Unexpected
//! faults (database unavailability) are logged and surfaced as a generic
//! server fault without leaking internal detail.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use slotbook_core::errors::BookingError;

/// Application error wrapper that provides HTTP status code mapping.
///
/// `AppError` wraps domain-specific `BookingError` instances and implements
/// `IntoResponse` to convert them into HTTP responses with appropriate
/// status codes and JSON payloads of the shape
/// `{ "error": <message>, "code": <stable code> }`.
#[derive(Debug)]
pub struct AppError(pub BookingError);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Map error types to HTTP status codes
        let status = match &self.0 {
            BookingError::NotFound(_) => StatusCode::NOT_FOUND,
            BookingError::Validation(_) => StatusCode::BAD_REQUEST,
            BookingError::InvalidTimezone(_) => StatusCode::BAD_REQUEST,
            BookingError::InvalidTimeFormat(_) => StatusCode::BAD_REQUEST,
            BookingError::BusinessClosed(_) => StatusCode::BAD_REQUEST,
            BookingError::Authentication(_) => StatusCode::UNAUTHORIZED,
            BookingError::Forbidden(_) => StatusCode::FORBIDDEN,
            BookingError::SlotConflict => StatusCode::CONFLICT,
            BookingError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            BookingError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // Server faults are logged with their cause but reported generically
        let message = match &self.0 {
            BookingError::Database(report) => {
                tracing::error!("Database error: {report:?}");
                "Internal server error".to_string()
            }
            BookingError::Internal(err) => {
                tracing::error!("Internal error: {err}");
                "Internal server error".to_string()
            }
            other => other.to_string(),
        };

        let body = Json(json!({ "error": message, "code": self.0.code() }));

        // Combine status code and JSON body into a response
        (status, body).into_response()
    }
}

/// Automatic conversion from BookingError to AppError.
///
/// This implementation allows using `?` operator with functions that return
/// `Result<T, BookingError>` in handler functions that return
/// `Result<T, AppError>`.
impl From<BookingError> for AppError {
    fn from(err: BookingError) -> Self {
        AppError(err)
    }
}

/// Automatic conversion from eyre::Report to AppError.
///
/// Repository functions return `eyre::Result`; this wraps their failures in
/// a `BookingError::Database` variant so `?` works in handlers.
impl From<eyre::Report> for AppError {
    fn from(err: eyre::Report) -> Self {
        AppError(BookingError::Database(err))
    }
}
