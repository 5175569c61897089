use crate::models::DbEmployee;
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

pub async fn create_employee(
    pool: &Pool<Postgres>,
    business_id: Uuid,
    name: &str,
    role: &str,
) -> Result<DbEmployee> {
    let id = Uuid::new_v4();

    tracing::debug!("Creating employee: id={}, business_id={}", id, business_id);

    let employee = sqlx::query_as::<_, DbEmployee>(
        r#"
        INSERT INTO employees (id, business_id, name, role)
        VALUES ($1, $2, $3, $4)
        RETURNING id, business_id, name, role, created_at
        "#,
    )
    .bind(id)
    .bind(business_id)
    .bind(name)
    .bind(role)
    .fetch_one(pool)
    .await?;

    Ok(employee)
}

pub async fn get_employee_by_id(pool: &Pool<Postgres>, id: Uuid) -> Result<Option<DbEmployee>> {
    let employee = sqlx::query_as::<_, DbEmployee>(
        r#"
        SELECT id, business_id, name, role, created_at
        FROM employees
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(employee)
}

pub async fn get_employees_by_business(
    pool: &Pool<Postgres>,
    business_id: Uuid,
) -> Result<Vec<DbEmployee>> {
    let employees = sqlx::query_as::<_, DbEmployee>(
        r#"
        SELECT id, business_id, name, role, created_at
        FROM employees
        WHERE business_id = $1
        ORDER BY name ASC
        "#,
    )
    .bind(business_id)
    .fetch_all(pool)
    .await?;

    Ok(employees)
}

pub async fn update_employee(
    pool: &Pool<Postgres>,
    id: Uuid,
    name: &str,
    role: &str,
) -> Result<DbEmployee> {
    let employee = sqlx::query_as::<_, DbEmployee>(
        r#"
        UPDATE employees
        SET name = $2, role = $3
        WHERE id = $1
        RETURNING id, business_id, name, role, created_at
        "#,
    )
    .bind(id)
    .bind(name)
    .bind(role)
    .fetch_one(pool)
    .await?;

    Ok(employee)
}

pub async fn delete_employee(pool: &Pool<Postgres>, id: Uuid) -> Result<()> {
    sqlx::query("DELETE FROM employees WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(())
}
