use crate::models::{BookingContext, ContextLookup, DbService};
use crate::repositories::{business, employee};
use eyre::Result;
use slotbook_core::models::service::{CreateServiceRequest, UpdateServiceRequest};
use sqlx::{Pool, Postgres};
use uuid::Uuid;

pub async fn create_service(
    pool: &Pool<Postgres>,
    business_id: Uuid,
    request: &CreateServiceRequest,
) -> Result<DbService> {
    let id = Uuid::new_v4();

    tracing::debug!(
        "Creating service: id={}, employee_id={}, duration={}min",
        id,
        request.employee_id,
        request.duration_minutes
    );

    let service = sqlx::query_as::<_, DbService>(
        r#"
        INSERT INTO services (id, employee_id, business_id, name, description,
            price, duration_minutes, is_featured, service_group)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
        RETURNING id, employee_id, business_id, name, description, price,
            duration_minutes, is_featured, service_group, created_at
        "#,
    )
    .bind(id)
    .bind(request.employee_id)
    .bind(business_id)
    .bind(&request.name)
    .bind(&request.description)
    .bind(request.price)
    .bind(request.duration_minutes)
    .bind(request.is_featured)
    .bind(&request.group)
    .fetch_one(pool)
    .await?;

    Ok(service)
}

pub async fn get_service_by_id(pool: &Pool<Postgres>, id: Uuid) -> Result<Option<DbService>> {
    let service = sqlx::query_as::<_, DbService>(
        r#"
        SELECT id, employee_id, business_id, name, description, price,
            duration_minutes, is_featured, service_group, created_at
        FROM services
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(service)
}

pub async fn get_services_by_employee(
    pool: &Pool<Postgres>,
    employee_id: Uuid,
) -> Result<Vec<DbService>> {
    let services = sqlx::query_as::<_, DbService>(
        r#"
        SELECT id, employee_id, business_id, name, description, price,
            duration_minutes, is_featured, service_group, created_at
        FROM services
        WHERE employee_id = $1
        ORDER BY name ASC
        "#,
    )
    .bind(employee_id)
    .fetch_all(pool)
    .await?;

    Ok(services)
}

pub async fn update_service(
    pool: &Pool<Postgres>,
    id: Uuid,
    request: &UpdateServiceRequest,
) -> Result<DbService> {
    let service = sqlx::query_as::<_, DbService>(
        r#"
        UPDATE services
        SET name = $2, description = $3, price = $4, duration_minutes = $5,
            is_featured = $6, service_group = $7
        WHERE id = $1
        RETURNING id, employee_id, business_id, name, description, price,
            duration_minutes, is_featured, service_group, created_at
        "#,
    )
    .bind(id)
    .bind(&request.name)
    .bind(&request.description)
    .bind(request.price)
    .bind(request.duration_minutes)
    .bind(request.is_featured)
    .bind(&request.group)
    .fetch_one(pool)
    .await?;

    Ok(service)
}

/// Resolves the full service -> employee -> business chain in one place.
///
/// Both the availability handler and the reservation ledger consume this, so
/// a broken link is reported identically everywhere.
pub async fn resolve_booking_context(
    pool: &Pool<Postgres>,
    service_id: Uuid,
) -> Result<ContextLookup> {
    let Some(service) = get_service_by_id(pool, service_id).await? else {
        return Ok(ContextLookup::MissingService);
    };

    let Some(employee) = employee::get_employee_by_id(pool, service.employee_id).await? else {
        return Ok(ContextLookup::MissingEmployee);
    };

    let Some(business) = business::get_business_by_id(pool, employee.business_id).await? else {
        return Ok(ContextLookup::MissingBusiness);
    };

    Ok(ContextLookup::Found(BookingContext {
        business,
        employee,
        service,
    }))
}
