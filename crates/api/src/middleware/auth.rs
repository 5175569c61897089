//! # Identity Extraction Module
//!
//! This module establishes the caller's identity for request handlers.
//!
//! Authentication itself happens upstream: a gateway in front of this
//! service validates the caller's credentials and forwards the resulting
//! user id in the `X-User-Id` header. Handlers that need an identity take
//! an [`AuthUser`] argument; requests without a valid header are rejected
//! with 401 before the handler body runs.

use axum::{extract::FromRequestParts, http::request::Parts};
use slotbook_core::errors::BookingError;
use uuid::Uuid;

use crate::middleware::error_handling::AppError;

/// Header carrying the authenticated caller's id, set by the gateway.
pub const USER_ID_HEADER: &str = "x-user-id";

/// The authenticated caller, extracted from request headers.
///
/// # Example
///
/// ```rust,ignore
/// async fn create_reservation(
///     AuthUser(user_id): AuthUser,
///     State(state): State<Arc<ApiState>>,
///     Json(payload): Json<CreateReservationRequest>,
/// ) -> Result<Json<ReservationResponse>, AppError> {
///     // user_id identifies the caller
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthUser(pub Uuid);

#[axum::async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let value = parts
            .headers
            .get(USER_ID_HEADER)
            .ok_or_else(|| {
                AppError(BookingError::Authentication(
                    "Missing user identity".to_string(),
                ))
            })?
            .to_str()
            .map_err(|_| {
                AppError(BookingError::Authentication(
                    "Malformed user identity".to_string(),
                ))
            })?;

        let user_id = Uuid::parse_str(value).map_err(|_| {
            AppError(BookingError::Authentication(
                "Malformed user identity".to_string(),
            ))
        })?;

        Ok(AuthUser(user_id))
    }
}
