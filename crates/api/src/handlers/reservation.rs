//! # Reservation Handlers
//!
//! The write side of the booking flow plus the reservation listings. The
//! no-double-booking invariant is enforced inside the ledger transaction in
//! the database layer; these handlers translate its verdict to HTTP.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::NaiveDate;
use serde::Deserialize;
use std::sync::Arc;
use uuid::Uuid;

use slotbook_core::{
    errors::BookingError,
    models::{
        employee::EmployeeSummary,
        reservation::{
            BusinessDayReservation, CreateReservationRequest, EmployeeDayReservations,
            ReservationResponse, ReservationStatus, UserReservation,
        },
        service::ServiceSummary,
    },
};
use slotbook_db::{
    models::DbReservationDetail,
    repositories::{business, reservation, service},
};

use crate::{
    handlers::require_context,
    middleware::{auth::AuthUser, error_handling::AppError},
    ApiState,
};

/// Books a slot for the authenticated caller
///
/// The request carries a wall-clock start in the caller's own timezone; it
/// is normalized to UTC before the conflict check. On a lost race the
/// response is 409 with code `slot_conflict` and the client should re-query
/// availability.
///
/// # Endpoint
///
/// ```text
/// POST /api/reservations
/// ```
///
/// # Errors
///
/// * `BookingError::Validation` - Requested initial status is `cancelled`
/// * `BookingError::InvalidTimezone` - Unknown IANA zone name
/// * `BookingError::NotFound` - Service, employee or business missing
/// * `BookingError::SlotConflict` - The interval is already held
/// * `BookingError::Database` - Database error
#[axum::debug_handler]
pub async fn create_reservation(
    AuthUser(user_id): AuthUser,
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<CreateReservationRequest>,
) -> Result<(StatusCode, Json<ReservationResponse>), AppError> {
    let status = payload.status.unwrap_or(ReservationStatus::Active);
    if status == ReservationStatus::Cancelled {
        return Err(AppError(BookingError::Validation(
            "A reservation cannot be created in the cancelled state".to_string(),
        )));
    }

    let context = require_context(
        service::resolve_booking_context(&state.db_pool, payload.service_id).await?,
    )?;

    let start_time = state
        .normalizer
        .to_utc_instant(payload.start_local, &payload.timezone)?;

    let created = reservation::create_reservation(
        &state.db_pool,
        user_id,
        &context.service,
        start_time,
        status.as_str(),
    )
    .await?
    .ok_or(BookingError::SlotConflict)?;

    Ok((
        StatusCode::CREATED,
        Json(ReservationResponse {
            id: created.id,
            service_id: created.service_id,
            start_time: created.start_time,
            status: ReservationStatus::from_str(&created.status),
            created_at: created.created_at,
        }),
    ))
}

/// Lists the authenticated caller's reservations, all statuses included
///
/// # Endpoint
///
/// ```text
/// GET /api/reservations
/// ```
#[axum::debug_handler]
pub async fn get_user_reservations(
    AuthUser(user_id): AuthUser,
    State(state): State<Arc<ApiState>>,
) -> Result<Json<Vec<UserReservation>>, AppError> {
    let rows = reservation::list_for_user(&state.db_pool, user_id).await?;

    let reservations = rows
        .into_iter()
        .map(|row| UserReservation {
            id: row.id,
            start_time: row.start_time,
            status: ReservationStatus::from_str(&row.status),
            service: ServiceSummary {
                id: row.service_id,
                name: row.service_name,
                description: row.service_description,
                price: row.service_price,
                duration_minutes: row.service_duration_minutes,
                group: row.service_group,
            },
            employee: EmployeeSummary {
                id: row.employee_id,
                name: row.employee_name,
            },
        })
        .collect();

    Ok(Json(reservations))
}

/// Query parameters for the per-business daily listing
#[derive(Debug, Deserialize)]
pub struct DayQuery {
    /// Calendar date to list, `YYYY-MM-DD`
    pub date: NaiveDate,
}

/// Lists a business's reservations on one day, grouped per employee
///
/// Restricted to the business owner.
///
/// # Endpoint
///
/// ```text
/// GET /api/reservations/business/:business_id?date=2026-03-02
/// ```
///
/// # Errors
///
/// * `BookingError::NotFound` - Unknown business
/// * `BookingError::Forbidden` - Caller does not own the business
/// * `BookingError::Database` - Database error
#[axum::debug_handler]
pub async fn get_business_reservations(
    AuthUser(user_id): AuthUser,
    State(state): State<Arc<ApiState>>,
    Path(business_id): Path<Uuid>,
    Query(query): Query<DayQuery>,
) -> Result<Json<Vec<EmployeeDayReservations>>, AppError> {
    let found = business::get_business_by_id(&state.db_pool, business_id)
        .await?
        .ok_or_else(|| BookingError::NotFound("Business not found".to_string()))?;

    if found.owner_id != user_id {
        return Err(AppError(BookingError::Forbidden(
            "Only the business owner can list its reservations".to_string(),
        )));
    }

    let rows =
        reservation::list_for_business_on_date(&state.db_pool, business_id, query.date).await?;

    Ok(Json(group_by_employee(rows)))
}

/// Groups a day's reservation rows per employee, preserving row order.
///
/// Rows arrive sorted by employee name then start time, so one pass with a
/// look-back at the last group suffices.
pub fn group_by_employee(rows: Vec<DbReservationDetail>) -> Vec<EmployeeDayReservations> {
    let mut grouped: Vec<EmployeeDayReservations> = Vec::new();

    for row in rows {
        let employee = EmployeeSummary {
            id: row.employee_id,
            name: row.employee_name.clone(),
        };
        let entry = BusinessDayReservation {
            id: row.id,
            start_time: row.start_time,
            status: ReservationStatus::from_str(&row.status),
            service: ServiceSummary {
                id: row.service_id,
                name: row.service_name,
                description: row.service_description,
                price: row.service_price,
                duration_minutes: row.service_duration_minutes,
                group: row.service_group,
            },
        };

        match grouped.last_mut() {
            Some(last) if last.employee.id == employee.id => last.reservations.push(entry),
            _ => grouped.push(EmployeeDayReservations {
                employee,
                reservations: vec![entry],
            }),
        }
    }

    grouped
}

/// Cancels one of the caller's reservations
///
/// Cancelling is terminal and idempotent: a second cancel of the same
/// reservation succeeds without touching the row again. The slot becomes
/// available to other clients immediately.
///
/// # Endpoint
///
/// ```text
/// PUT /api/reservations/:id/cancel
/// ```
///
/// # Errors
///
/// * `BookingError::NotFound` - Unknown reservation id
/// * `BookingError::Forbidden` - Reservation belongs to another user
/// * `BookingError::Database` - Database error
#[axum::debug_handler]
pub async fn cancel_reservation(
    AuthUser(user_id): AuthUser,
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ReservationResponse>, AppError> {
    let found = reservation::get_reservation_by_id(&state.db_pool, id)
        .await?
        .ok_or_else(|| BookingError::NotFound("Reservation not found".to_string()))?;

    if found.user_id != user_id {
        return Err(AppError(BookingError::Forbidden(
            "Only the reservation's owner can cancel it".to_string(),
        )));
    }

    let cancelled = if ReservationStatus::from_str(&found.status) == ReservationStatus::Cancelled {
        found
    } else {
        reservation::cancel_reservation(&state.db_pool, id).await?
    };

    Ok(Json(ReservationResponse {
        id: cancelled.id,
        service_id: cancelled.service_id,
        start_time: cancelled.start_time,
        status: ReservationStatus::from_str(&cancelled.status),
        created_at: cancelled.created_at,
    }))
}
