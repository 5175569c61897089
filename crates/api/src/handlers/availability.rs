//! # Availability Handlers
//!
//! This module computes the bookable slots for a service on a given day.
//! It is the read side of the booking flow: clients call it to render a
//! slot picker, then submit one of the returned starts as a reservation.
//!
//! ## Slot Enumeration Algorithm
//!
//! 1. Resolve the service's employee and business in one lookup
//! 2. Load the business's working hours for the queried weekday; no row
//!    means the business is closed that day
//! 3. Load the employee's active reservations on the queried day as
//!    half-open UTC intervals
//! 4. Walk candidate starts from the opening time at the configured
//!    granularity, keeping candidates that fit before closing and overlap
//!    no loaded interval
//! 5. Convert the surviving UTC starts back to the client's wall clock
//!
//! The returned list is advisory: the overlap check at reservation time is
//! the authority, so a slot shown here can still be lost to a faster
//! client.

use axum::{
    extract::{Query, State},
    Json,
};
use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime};
use serde::Deserialize;
use std::sync::Arc;
use uuid::Uuid;

use slotbook_core::{
    errors::BookingError,
    slots::{AvailableSlots, Interval},
};
use slotbook_db::{
    models::weekday_to_db,
    repositories::{reservation, service, working_hours},
};

use crate::{handlers::require_context, middleware::error_handling::AppError, ApiState};

/// Query parameters for the availability endpoint
///
/// # Fields
///
/// * `service_id` - UUID of the service to book
/// * `date` - Calendar date to query, `YYYY-MM-DD`
/// * `timezone` - IANA zone name the client wants results expressed in
#[derive(Debug, Deserialize)]
pub struct AvailabilityQuery {
    /// Service whose duration and employee drive the computation
    pub service_id: Uuid,

    /// Calendar date to enumerate slots for
    pub date: NaiveDate,

    /// IANA timezone name, e.g. "Europe/Warsaw"
    pub timezone: String,
}

/// Lists the free slot starts for a service on one day
///
/// # Endpoint
///
/// ```text
/// GET /api/availability?service_id=<uuid>&date=2026-03-02&timezone=Europe/Warsaw
/// ```
///
/// # Returns
///
/// * `Result<Json<Vec<NaiveDateTime>>, AppError>` - Ascending wall-clock
///   start times in the requested timezone; empty when the day is fully
///   booked
///
/// # Errors
///
/// * `BookingError::InvalidTimezone` - Unknown IANA zone name
/// * `BookingError::NotFound` - Service, employee or business missing
/// * `BookingError::BusinessClosed` - No working hours for that weekday
/// * `BookingError::Database` - Database error
#[axum::debug_handler]
pub async fn get_availability(
    State(state): State<Arc<ApiState>>,
    Query(query): Query<AvailabilityQuery>,
) -> Result<Json<Vec<NaiveDateTime>>, AppError> {
    // STEP 1: Reject unknown zones before touching the database
    state.normalizer.check_zone(&query.timezone, query.date)?;

    // STEP 2: Resolve the service -> employee -> business chain
    let context = require_context(
        service::resolve_booking_context(&state.db_pool, query.service_id).await?,
    )?;

    // STEP 3: Working hours for the queried weekday; absence means closed
    let weekday = weekday_to_db(query.date.weekday());
    let hours = working_hours::get_for_day(&state.db_pool, context.business.id, weekday)
        .await?
        .ok_or_else(|| BookingError::BusinessClosed(query.date.weekday().to_string()))?;

    // STEP 4: The employee's active reservations, as blocking intervals
    let booked = reservation::list_active_intervals_for_employee_on_date(
        &state.db_pool,
        context.employee.id,
        query.date,
    )
    .await?
    .into_iter()
    .map(|row| {
        Interval::starting_at(row.start_time, Duration::minutes(row.duration_minutes as i64))
    })
    .collect();

    // STEP 5: Enumerate free starts and express them on the client's clock
    let duration = Duration::minutes(context.service.duration_minutes as i64);
    let slots = AvailableSlots::new(
        query.date,
        hours.start_time,
        hours.end_time,
        duration,
        state.slot_granularity,
        booked,
    );

    let localized = slots
        .map(|start| state.normalizer.to_local_instant(start, &query.timezone))
        .collect::<Result<Vec<_>, _>>()?;

    tracing::debug!(
        "Availability computed: service_id={}, date={}, slots={}",
        query.service_id,
        query.date,
        localized.len()
    );

    Ok(Json(localized))
}
