use thiserror::Error;

#[derive(Error, Debug)]
pub enum BookingError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Authentication error: {0}")]
    Authentication(String),

    #[error("Access denied: {0}")]
    Forbidden(String),

    #[error("Invalid time zone: {0}")]
    InvalidTimezone(String),

    #[error("Invalid time format: {0}")]
    InvalidTimeFormat(String),

    #[error("Business is closed on {0}")]
    BusinessClosed(String),

    #[error("That time has already been reserved")]
    SlotConflict,

    #[error("Database error: {0}")]
    Database(#[from] eyre::Report),

    #[error("Internal server error: {0}")]
    Internal(#[from] Box<dyn std::error::Error + Send + Sync>),
}

impl BookingError {
    /// Stable machine-readable code, part of the public error contract.
    pub fn code(&self) -> &'static str {
        match self {
            BookingError::NotFound(_) => "not_found",
            BookingError::Validation(_) => "validation",
            BookingError::Authentication(_) => "authentication",
            BookingError::Forbidden(_) => "forbidden",
            BookingError::InvalidTimezone(_) => "invalid_timezone",
            BookingError::InvalidTimeFormat(_) => "invalid_time_format",
            BookingError::BusinessClosed(_) => "business_closed",
            BookingError::SlotConflict => "slot_conflict",
            BookingError::Database(_) => "server_fault",
            BookingError::Internal(_) => "server_fault",
        }
    }
}

pub type BookingResult<T> = Result<T, BookingError>;
