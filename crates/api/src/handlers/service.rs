//! # Service Handlers
//!
//! CRUD for the services an employee offers. A service's duration drives
//! the availability computation, so a non-positive duration is rejected
//! here before it can poison slot enumeration.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use rust_decimal::Decimal;
use std::sync::Arc;
use uuid::Uuid;

use slotbook_core::{
    errors::BookingError,
    models::service::{CreateServiceRequest, Service, UpdateServiceRequest},
};
use slotbook_db::{
    models::DbService,
    repositories::{business, employee, service},
};

use crate::{
    middleware::{auth::AuthUser, error_handling::AppError},
    ApiState,
};

/// Adds a service offered by one of the caller's employees
///
/// # Endpoint
///
/// ```text
/// POST /api/services
/// ```
///
/// # Errors
///
/// * `BookingError::NotFound` - Unknown employee or business
/// * `BookingError::Forbidden` - Caller does not own the employee's business
/// * `BookingError::Validation` - Non-positive duration or negative price
/// * `BookingError::Database` - Database error
#[axum::debug_handler]
pub async fn create_service(
    AuthUser(user_id): AuthUser,
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<CreateServiceRequest>,
) -> Result<(StatusCode, Json<Service>), AppError> {
    validate_pricing(payload.duration_minutes, payload.price)?;

    let found = employee::get_employee_by_id(&state.db_pool, payload.employee_id)
        .await?
        .ok_or_else(|| BookingError::NotFound("Employee not found".to_string()))?;

    require_owner(&state, found.business_id, user_id).await?;

    let created = service::create_service(&state.db_pool, found.business_id, &payload).await?;

    Ok((StatusCode::CREATED, Json(to_service(created))))
}

/// Lists the services offered by one employee
///
/// # Endpoint
///
/// ```text
/// GET /api/services/employee/:employee_id
/// ```
#[axum::debug_handler]
pub async fn get_employee_services(
    State(state): State<Arc<ApiState>>,
    Path(employee_id): Path<Uuid>,
) -> Result<Json<Vec<Service>>, AppError> {
    employee::get_employee_by_id(&state.db_pool, employee_id)
        .await?
        .ok_or_else(|| BookingError::NotFound("Employee not found".to_string()))?;

    let services = service::get_services_by_employee(&state.db_pool, employee_id).await?;

    Ok(Json(services.into_iter().map(to_service).collect()))
}

/// Updates a service's details
///
/// # Endpoint
///
/// ```text
/// PUT /api/services/:id
/// ```
#[axum::debug_handler]
pub async fn update_service(
    AuthUser(user_id): AuthUser,
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateServiceRequest>,
) -> Result<Json<Service>, AppError> {
    validate_pricing(payload.duration_minutes, payload.price)?;

    let found = service::get_service_by_id(&state.db_pool, id)
        .await?
        .ok_or_else(|| BookingError::NotFound("Service not found".to_string()))?;

    require_owner(&state, found.business_id, user_id).await?;

    let updated = service::update_service(&state.db_pool, id, &payload).await?;

    Ok(Json(to_service(updated)))
}

fn validate_pricing(duration_minutes: i32, price: Decimal) -> Result<(), AppError> {
    if duration_minutes <= 0 {
        return Err(AppError(BookingError::Validation(
            "Service duration must be positive".to_string(),
        )));
    }
    if price < Decimal::ZERO {
        return Err(AppError(BookingError::Validation(
            "Service price must not be negative".to_string(),
        )));
    }

    Ok(())
}

async fn require_owner(state: &ApiState, business_id: Uuid, user_id: Uuid) -> Result<(), AppError> {
    let found = business::get_business_by_id(&state.db_pool, business_id)
        .await?
        .ok_or_else(|| BookingError::NotFound("Business not found".to_string()))?;

    if found.owner_id != user_id {
        return Err(AppError(BookingError::Forbidden(
            "Only the business owner can manage its services".to_string(),
        )));
    }

    Ok(())
}

fn to_service(row: DbService) -> Service {
    Service {
        id: row.id,
        employee_id: row.employee_id,
        business_id: row.business_id,
        name: row.name,
        description: row.description,
        price: row.price,
        duration_minutes: row.duration_minutes,
        is_featured: row.is_featured,
        group: row.service_group,
    }
}
