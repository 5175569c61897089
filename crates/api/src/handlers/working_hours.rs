//! # Working Hours Handlers
//!
//! Weekly opening hours of a business, one optional row per weekday. Hours
//! arrive as local wall-clock strings with a zone name and are stored as
//! UTC times-of-day; conversion is anchored to the current date, so the
//! stored pair reflects the zone's offset at the time of the upsert.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::{Utc, Weekday};
use std::sync::Arc;
use uuid::Uuid;

use slotbook_core::{
    errors::BookingError,
    models::working_hours::{UpsertWorkingHoursRequest, WorkingHours},
};
use slotbook_db::{
    models::{weekday_from_db, weekday_to_db, DbBusiness},
    repositories::{business, working_hours},
};

use crate::{
    middleware::{auth::AuthUser, error_handling::AppError},
    ApiState,
};

/// Lists a business's weekly hours, in UTC
///
/// Weekdays without a row are closed days and are simply absent from the
/// list; a business with no hours at all yields an empty list, not 404.
///
/// # Endpoint
///
/// ```text
/// GET /api/businesses/:id/working-hours
/// ```
#[axum::debug_handler]
pub async fn get_working_hours(
    State(state): State<Arc<ApiState>>,
    Path(business_id): Path<Uuid>,
) -> Result<Json<Vec<WorkingHours>>, AppError> {
    business::get_business_by_id(&state.db_pool, business_id)
        .await?
        .ok_or_else(|| BookingError::NotFound("Business not found".to_string()))?;

    let hours = working_hours::get_all(&state.db_pool, business_id).await?;

    let hours = hours
        .into_iter()
        .map(|row| WorkingHours {
            business_id: row.business_id,
            weekday: weekday_from_db(row.weekday),
            start_time_utc: row.start_time,
            end_time_utc: row.end_time,
        })
        .collect();

    Ok(Json(hours))
}

/// Sets or replaces one weekday's hours
///
/// Restricted to the business owner. The converted pair must stay within
/// one UTC day; hours that cross UTC midnight after conversion are
/// rejected.
///
/// # Endpoint
///
/// ```text
/// PUT /api/businesses/:id/working-hours
/// ```
///
/// # Errors
///
/// * `BookingError::NotFound` - Unknown business
/// * `BookingError::Forbidden` - Caller does not own the business
/// * `BookingError::InvalidTimeFormat` - Times not in `HH:mm`
/// * `BookingError::InvalidTimezone` - Unknown IANA zone name
/// * `BookingError::Validation` - Converted start is not before end
/// * `BookingError::Database` - Database error
#[axum::debug_handler]
pub async fn upsert_working_hours(
    AuthUser(user_id): AuthUser,
    State(state): State<Arc<ApiState>>,
    Path(business_id): Path<Uuid>,
    Json(payload): Json<UpsertWorkingHoursRequest>,
) -> Result<Json<WorkingHours>, AppError> {
    require_owned_business(&state, business_id, user_id).await?;

    // Offsets need a calendar date; the upsert is anchored to today.
    let anchor = Utc::now().date_naive();
    let start = state
        .normalizer
        .to_utc_time_of_day(&payload.start_local, &payload.timezone, anchor)?;
    let end = state
        .normalizer
        .to_utc_time_of_day(&payload.end_local, &payload.timezone, anchor)?;

    if start >= end {
        return Err(AppError(BookingError::Validation(
            "Working hours must start before they end and not cross UTC midnight".to_string(),
        )));
    }

    let row = working_hours::upsert(
        &state.db_pool,
        business_id,
        weekday_to_db(payload.weekday),
        start,
        end,
    )
    .await?;

    Ok(Json(WorkingHours {
        business_id: row.business_id,
        weekday: weekday_from_db(row.weekday),
        start_time_utc: row.start_time,
        end_time_utc: row.end_time,
    }))
}

/// Removes one weekday's hours, marking the business closed that day
///
/// # Endpoint
///
/// ```text
/// DELETE /api/businesses/:id/working-hours/:weekday
/// ```
///
/// The weekday segment accepts English names or their three-letter forms,
/// e.g. `monday` or `mon`.
#[axum::debug_handler]
pub async fn delete_working_hours(
    AuthUser(user_id): AuthUser,
    State(state): State<Arc<ApiState>>,
    Path((business_id, weekday)): Path<(Uuid, String)>,
) -> Result<StatusCode, AppError> {
    require_owned_business(&state, business_id, user_id).await?;

    let weekday = weekday.parse::<Weekday>().map_err(|_| {
        AppError(BookingError::Validation(format!(
            "Unknown weekday: {weekday}"
        )))
    })?;

    let deleted =
        working_hours::delete(&state.db_pool, business_id, weekday_to_db(weekday)).await?;

    if !deleted {
        return Err(AppError(BookingError::NotFound(
            "No working hours recorded for that weekday".to_string(),
        )));
    }

    Ok(StatusCode::NO_CONTENT)
}

/// Loads the business and checks the caller owns it.
async fn require_owned_business(
    state: &ApiState,
    business_id: Uuid,
    user_id: Uuid,
) -> Result<DbBusiness, AppError> {
    let found = business::get_business_by_id(&state.db_pool, business_id)
        .await?
        .ok_or_else(|| BookingError::NotFound("Business not found".to_string()))?;

    if found.owner_id != user_id {
        return Err(AppError(BookingError::Forbidden(
            "Only the business owner can manage its working hours".to_string(),
        )));
    }

    Ok(found)
}
