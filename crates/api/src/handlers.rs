pub mod availability;
pub mod business;
pub mod employee;
pub mod reservation;
pub mod service;
pub mod working_hours;

use slotbook_core::errors::BookingError;
use slotbook_db::models::{BookingContext, ContextLookup};

use crate::middleware::error_handling::AppError;

/// Unwraps a booking-context lookup, reporting the first missing link in
/// the service -> employee -> business chain.
pub(crate) fn require_context(lookup: ContextLookup) -> Result<BookingContext, AppError> {
    match lookup {
        ContextLookup::Found(context) => Ok(context),
        ContextLookup::MissingService => Err(AppError(BookingError::NotFound(
            "Service not found".to_string(),
        ))),
        ContextLookup::MissingEmployee => Err(AppError(BookingError::NotFound(
            "Employee not found for service".to_string(),
        ))),
        ContextLookup::MissingBusiness => Err(AppError(BookingError::NotFound(
            "Business not found for service".to_string(),
        ))),
    }
}
