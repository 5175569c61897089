use crate::models::DbBusiness;
use eyre::Result;
use slotbook_core::models::business::{CreateBusinessRequest, UpdateBusinessRequest};
use sqlx::{Pool, Postgres};
use uuid::Uuid;

const BUSINESS_COLUMNS: &str = "id, owner_id, category, name, email, phone_number, \
     region, city, street, building_number, room_number, postal_code, created_at";

pub async fn create_business(
    pool: &Pool<Postgres>,
    owner_id: Uuid,
    request: &CreateBusinessRequest,
) -> Result<DbBusiness> {
    let id = Uuid::new_v4();

    tracing::debug!("Creating business: id={}, name={}", id, request.name);

    let business = sqlx::query_as::<_, DbBusiness>(&format!(
        r#"
        INSERT INTO businesses (id, owner_id, category, name, email, phone_number,
            region, city, street, building_number, room_number, postal_code)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
        RETURNING {BUSINESS_COLUMNS}
        "#
    ))
    .bind(id)
    .bind(owner_id)
    .bind(&request.category)
    .bind(&request.name)
    .bind(&request.email)
    .bind(&request.phone_number)
    .bind(&request.address.region)
    .bind(&request.address.city)
    .bind(&request.address.street)
    .bind(&request.address.building_number)
    .bind(&request.address.room_number)
    .bind(&request.address.postal_code)
    .fetch_one(pool)
    .await?;

    Ok(business)
}

pub async fn get_business_by_id(pool: &Pool<Postgres>, id: Uuid) -> Result<Option<DbBusiness>> {
    let business = sqlx::query_as::<_, DbBusiness>(&format!(
        r#"
        SELECT {BUSINESS_COLUMNS}
        FROM businesses
        WHERE id = $1
        "#
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(business)
}

pub async fn get_business_by_owner(
    pool: &Pool<Postgres>,
    owner_id: Uuid,
) -> Result<Option<DbBusiness>> {
    let business = sqlx::query_as::<_, DbBusiness>(&format!(
        r#"
        SELECT {BUSINESS_COLUMNS}
        FROM businesses
        WHERE owner_id = $1
        "#
    ))
    .bind(owner_id)
    .fetch_optional(pool)
    .await?;

    Ok(business)
}

/// Public listing, optionally narrowed by city and category.
pub async fn list_businesses(
    pool: &Pool<Postgres>,
    city: Option<&str>,
    category: Option<&str>,
) -> Result<Vec<DbBusiness>> {
    let businesses = sqlx::query_as::<_, DbBusiness>(&format!(
        r#"
        SELECT {BUSINESS_COLUMNS}
        FROM businesses
        WHERE ($1::text IS NULL OR city = $1)
          AND ($2::text IS NULL OR category = $2)
        ORDER BY name ASC
        "#
    ))
    .bind(city)
    .bind(category)
    .fetch_all(pool)
    .await?;

    Ok(businesses)
}

pub async fn update_business(
    pool: &Pool<Postgres>,
    id: Uuid,
    request: &UpdateBusinessRequest,
) -> Result<DbBusiness> {
    let business = sqlx::query_as::<_, DbBusiness>(&format!(
        r#"
        UPDATE businesses
        SET category = $2, name = $3, email = $4, phone_number = $5,
            region = $6, city = $7, street = $8, building_number = $9,
            room_number = $10, postal_code = $11
        WHERE id = $1
        RETURNING {BUSINESS_COLUMNS}
        "#
    ))
    .bind(id)
    .bind(&request.category)
    .bind(&request.name)
    .bind(&request.email)
    .bind(&request.phone_number)
    .bind(&request.address.region)
    .bind(&request.address.city)
    .bind(&request.address.street)
    .bind(&request.address.building_number)
    .bind(&request.address.room_number)
    .bind(&request.address.postal_code)
    .fetch_one(pool)
    .await?;

    Ok(business)
}

/// Uniqueness probes used before insert; `exclude` skips the business being
/// updated so it does not collide with itself.
pub async fn name_taken(pool: &Pool<Postgres>, name: &str, exclude: Option<Uuid>) -> Result<bool> {
    let taken = sqlx::query_scalar::<_, bool>(
        "SELECT EXISTS (SELECT 1 FROM businesses WHERE name = $1 AND ($2::uuid IS NULL OR id <> $2))",
    )
    .bind(name)
    .bind(exclude)
    .fetch_one(pool)
    .await?;

    Ok(taken)
}

pub async fn email_taken(pool: &Pool<Postgres>, email: &str, exclude: Option<Uuid>) -> Result<bool> {
    let taken = sqlx::query_scalar::<_, bool>(
        "SELECT EXISTS (SELECT 1 FROM businesses WHERE email = $1 AND ($2::uuid IS NULL OR id <> $2))",
    )
    .bind(email)
    .bind(exclude)
    .fetch_one(pool)
    .await?;

    Ok(taken)
}

pub async fn phone_taken(pool: &Pool<Postgres>, phone: &str, exclude: Option<Uuid>) -> Result<bool> {
    let taken = sqlx::query_scalar::<_, bool>(
        "SELECT EXISTS (SELECT 1 FROM businesses WHERE phone_number = $1 AND ($2::uuid IS NULL OR id <> $2))",
    )
    .bind(phone)
    .bind(exclude)
    .fetch_one(pool)
    .await?;

    Ok(taken)
}
