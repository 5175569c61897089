use eyre::Result;
use sqlx::{Pool, Postgres};
use tracing::info;

pub async fn initialize_database(pool: &Pool<Postgres>) -> Result<()> {
    info!("Initializing database schema...");

    // Create businesses table (address stored inline)
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS businesses (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            owner_id UUID NOT NULL,
            category VARCHAR(255) NOT NULL,
            name VARCHAR(255) NOT NULL UNIQUE,
            email VARCHAR(255) NOT NULL UNIQUE,
            phone_number VARCHAR(64) NOT NULL UNIQUE,
            region VARCHAR(255) NOT NULL,
            city VARCHAR(255) NOT NULL,
            street VARCHAR(255) NOT NULL,
            building_number VARCHAR(32) NOT NULL,
            room_number VARCHAR(32) NOT NULL,
            postal_code VARCHAR(32) NOT NULL,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create employees table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS employees (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            business_id UUID NOT NULL REFERENCES businesses(id) ON DELETE CASCADE,
            name VARCHAR(255) NOT NULL,
            role VARCHAR(255) NOT NULL,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create services table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS services (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            employee_id UUID NOT NULL REFERENCES employees(id) ON DELETE CASCADE,
            business_id UUID NOT NULL REFERENCES businesses(id) ON DELETE CASCADE,
            name VARCHAR(255) NOT NULL,
            description TEXT NOT NULL,
            price NUMERIC(10, 2) NOT NULL,
            duration_minutes INTEGER NOT NULL,
            is_featured BOOLEAN NOT NULL DEFAULT FALSE,
            service_group VARCHAR(255) NULL,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            CONSTRAINT positive_duration CHECK (duration_minutes > 0)
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create working_hours table, one row per business and weekday,
    // times-of-day stored in UTC
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS working_hours (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            business_id UUID NOT NULL REFERENCES businesses(id) ON DELETE CASCADE,
            weekday SMALLINT NOT NULL,
            start_time TIME NOT NULL,
            end_time TIME NOT NULL,
            CONSTRAINT valid_weekday CHECK (weekday BETWEEN 0 AND 6),
            CONSTRAINT valid_day_window CHECK (start_time < end_time),
            CONSTRAINT one_row_per_day UNIQUE (business_id, weekday)
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create reservations table; cancellation is a status transition, not a
    // delete. Rows only disappear when their service (or its employee or
    // business) is removed.
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS reservations (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            user_id UUID NOT NULL,
            service_id UUID NOT NULL REFERENCES services(id) ON DELETE CASCADE,
            start_time TIMESTAMP WITH TIME ZONE NOT NULL,
            status VARCHAR(32) NOT NULL,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            CONSTRAINT known_status CHECK (status IN ('active', 'pending', 'cancelled'))
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create indexes
    sqlx::query(
        r#"
        CREATE INDEX IF NOT EXISTS idx_businesses_owner_id ON businesses(owner_id);
        CREATE INDEX IF NOT EXISTS idx_businesses_city ON businesses(city);
        CREATE INDEX IF NOT EXISTS idx_employees_business_id ON employees(business_id);
        CREATE INDEX IF NOT EXISTS idx_services_employee_id ON services(employee_id);
        CREATE INDEX IF NOT EXISTS idx_services_business_id ON services(business_id);
        CREATE INDEX IF NOT EXISTS idx_working_hours_business_id ON working_hours(business_id);
        CREATE INDEX IF NOT EXISTS idx_reservations_service_id ON reservations(service_id);
        CREATE INDEX IF NOT EXISTS idx_reservations_user_id ON reservations(user_id);
        CREATE INDEX IF NOT EXISTS idx_reservations_start_time ON reservations(start_time);
        "#,
    )
    .execute(pool)
    .await?;

    info!("Database schema initialized successfully.");
    Ok(())
}
