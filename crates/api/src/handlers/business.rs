//! # Business Handlers
//!
//! CRUD for business records. A caller owns at most one business; name,
//! email and phone number are globally unique and probed before writes so
//! collisions surface as validation errors rather than constraint
//! violations.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use std::sync::Arc;
use uuid::Uuid;

use slotbook_core::{
    errors::BookingError,
    models::business::{Address, Business, CreateBusinessRequest, UpdateBusinessRequest},
};
use slotbook_db::{models::DbBusiness, repositories::business};

use crate::{
    middleware::{auth::AuthUser, error_handling::AppError},
    ApiState,
};

/// Registers a business for the authenticated caller
///
/// # Endpoint
///
/// ```text
/// POST /api/businesses
/// ```
///
/// # Errors
///
/// * `BookingError::Validation` - Caller already owns a business, or the
///   name, email or phone number is taken
/// * `BookingError::Database` - Database error
#[axum::debug_handler]
pub async fn create_business(
    AuthUser(user_id): AuthUser,
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<CreateBusinessRequest>,
) -> Result<(StatusCode, Json<Business>), AppError> {
    if business::get_business_by_owner(&state.db_pool, user_id)
        .await?
        .is_some()
    {
        return Err(AppError(BookingError::Validation(
            "Caller already owns a business".to_string(),
        )));
    }

    check_uniqueness(&state, &payload.name, &payload.email, &payload.phone_number, None).await?;

    let created = business::create_business(&state.db_pool, user_id, &payload).await?;

    Ok((StatusCode::CREATED, Json(to_business(created))))
}

/// Returns the authenticated caller's own business
///
/// # Endpoint
///
/// ```text
/// GET /api/businesses/me
/// ```
#[axum::debug_handler]
pub async fn get_my_business(
    AuthUser(user_id): AuthUser,
    State(state): State<Arc<ApiState>>,
) -> Result<Json<Business>, AppError> {
    let found = business::get_business_by_owner(&state.db_pool, user_id)
        .await?
        .ok_or_else(|| BookingError::NotFound("Caller owns no business".to_string()))?;

    Ok(Json(to_business(found)))
}

/// Returns one business by id
///
/// # Endpoint
///
/// ```text
/// GET /api/businesses/:id
/// ```
#[axum::debug_handler]
pub async fn get_business(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<Business>, AppError> {
    let found = business::get_business_by_id(&state.db_pool, id)
        .await?
        .ok_or_else(|| BookingError::NotFound("Business not found".to_string()))?;

    Ok(Json(to_business(found)))
}

/// Query parameters for the public business listing
#[derive(Debug, Deserialize)]
pub struct BusinessFilter {
    /// Narrow to businesses in this city
    pub city: Option<String>,

    /// Narrow to businesses in this category
    pub category: Option<String>,
}

/// Lists businesses, optionally filtered by city and category
///
/// # Endpoint
///
/// ```text
/// GET /api/businesses?city=Warsaw&category=barber
/// ```
#[axum::debug_handler]
pub async fn list_businesses(
    State(state): State<Arc<ApiState>>,
    Query(filter): Query<BusinessFilter>,
) -> Result<Json<Vec<Business>>, AppError> {
    let businesses = business::list_businesses(
        &state.db_pool,
        filter.city.as_deref(),
        filter.category.as_deref(),
    )
    .await?;

    Ok(Json(businesses.into_iter().map(to_business).collect()))
}

/// Updates the authenticated caller's business
///
/// # Endpoint
///
/// ```text
/// PUT /api/businesses
/// ```
///
/// # Errors
///
/// * `BookingError::NotFound` - Caller owns no business
/// * `BookingError::Validation` - New name, email or phone number collides
///   with another business
/// * `BookingError::Database` - Database error
#[axum::debug_handler]
pub async fn update_business(
    AuthUser(user_id): AuthUser,
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<UpdateBusinessRequest>,
) -> Result<Json<Business>, AppError> {
    let found = business::get_business_by_owner(&state.db_pool, user_id)
        .await?
        .ok_or_else(|| BookingError::NotFound("Caller owns no business".to_string()))?;

    check_uniqueness(
        &state,
        &payload.name,
        &payload.email,
        &payload.phone_number,
        Some(found.id),
    )
    .await?;

    let updated = business::update_business(&state.db_pool, found.id, &payload).await?;

    Ok(Json(to_business(updated)))
}

/// Probes the three unique columns, skipping `exclude` on updates.
async fn check_uniqueness(
    state: &ApiState,
    name: &str,
    email: &str,
    phone_number: &str,
    exclude: Option<Uuid>,
) -> Result<(), AppError> {
    if business::name_taken(&state.db_pool, name, exclude).await? {
        return Err(AppError(BookingError::Validation(
            "Business name already in use".to_string(),
        )));
    }
    if business::email_taken(&state.db_pool, email, exclude).await? {
        return Err(AppError(BookingError::Validation(
            "Business email already in use".to_string(),
        )));
    }
    if business::phone_taken(&state.db_pool, phone_number, exclude).await? {
        return Err(AppError(BookingError::Validation(
            "Business phone number already in use".to_string(),
        )));
    }

    Ok(())
}

fn to_business(row: DbBusiness) -> Business {
    Business {
        id: row.id,
        owner_id: row.owner_id,
        category: row.category,
        name: row.name,
        email: row.email,
        phone_number: row.phone_number,
        address: Address {
            region: row.region,
            city: row.city,
            street: row.street,
            building_number: row.building_number,
            room_number: row.room_number,
            postal_code: row.postal_code,
        },
    }
}
