//! # Employee Handlers
//!
//! CRUD for a business's employees. Writes are restricted to the business
//! owner; the per-business listing is public so clients can render staff
//! pickers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;
use uuid::Uuid;

use slotbook_core::{
    errors::BookingError,
    models::employee::{CreateEmployeeRequest, Employee, UpdateEmployeeRequest},
};
use slotbook_db::{
    models::DbEmployee,
    repositories::{business, employee},
};

use crate::{
    middleware::{auth::AuthUser, error_handling::AppError},
    ApiState,
};

/// Adds an employee to the caller's business
///
/// # Endpoint
///
/// ```text
/// POST /api/employees
/// ```
///
/// # Errors
///
/// * `BookingError::NotFound` - Unknown business
/// * `BookingError::Forbidden` - Caller does not own the business
/// * `BookingError::Database` - Database error
#[axum::debug_handler]
pub async fn create_employee(
    AuthUser(user_id): AuthUser,
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<CreateEmployeeRequest>,
) -> Result<(StatusCode, Json<Employee>), AppError> {
    let found = business::get_business_by_id(&state.db_pool, payload.business_id)
        .await?
        .ok_or_else(|| BookingError::NotFound("Business not found".to_string()))?;

    if found.owner_id != user_id {
        return Err(AppError(BookingError::Forbidden(
            "Only the business owner can add employees".to_string(),
        )));
    }

    let created = employee::create_employee(
        &state.db_pool,
        payload.business_id,
        &payload.name,
        &payload.role,
    )
    .await?;

    Ok((StatusCode::CREATED, Json(to_employee(created))))
}

/// Lists the employees of one business
///
/// # Endpoint
///
/// ```text
/// GET /api/employees/business/:business_id
/// ```
#[axum::debug_handler]
pub async fn get_business_employees(
    State(state): State<Arc<ApiState>>,
    Path(business_id): Path<Uuid>,
) -> Result<Json<Vec<Employee>>, AppError> {
    business::get_business_by_id(&state.db_pool, business_id)
        .await?
        .ok_or_else(|| BookingError::NotFound("Business not found".to_string()))?;

    let employees = employee::get_employees_by_business(&state.db_pool, business_id).await?;

    Ok(Json(employees.into_iter().map(to_employee).collect()))
}

/// Updates an employee's name and role
///
/// # Endpoint
///
/// ```text
/// PUT /api/employees/:id
/// ```
#[axum::debug_handler]
pub async fn update_employee(
    AuthUser(user_id): AuthUser,
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateEmployeeRequest>,
) -> Result<Json<Employee>, AppError> {
    require_owned_employee(&state, id, user_id).await?;

    let updated =
        employee::update_employee(&state.db_pool, id, &payload.name, &payload.role).await?;

    Ok(Json(to_employee(updated)))
}

/// Removes an employee along with their services and reservations
///
/// # Endpoint
///
/// ```text
/// DELETE /api/employees/:id
/// ```
#[axum::debug_handler]
pub async fn delete_employee(
    AuthUser(user_id): AuthUser,
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    require_owned_employee(&state, id, user_id).await?;

    employee::delete_employee(&state.db_pool, id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Loads the employee and checks the caller owns their business.
async fn require_owned_employee(
    state: &ApiState,
    employee_id: Uuid,
    user_id: Uuid,
) -> Result<DbEmployee, AppError> {
    let found = employee::get_employee_by_id(&state.db_pool, employee_id)
        .await?
        .ok_or_else(|| BookingError::NotFound("Employee not found".to_string()))?;

    let owner = business::get_business_by_id(&state.db_pool, found.business_id)
        .await?
        .ok_or_else(|| BookingError::NotFound("Business not found".to_string()))?;

    if owner.owner_id != user_id {
        return Err(AppError(BookingError::Forbidden(
            "Only the business owner can manage its employees".to_string(),
        )));
    }

    Ok(found)
}

fn to_employee(row: DbEmployee) -> Employee {
    Employee {
        id: row.id,
        business_id: row.business_id,
        name: row.name,
        role: row.role,
    }
}
