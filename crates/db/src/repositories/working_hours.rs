use crate::models::DbWorkingHours;
use chrono::NaiveTime;
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

pub async fn get_for_day(
    pool: &Pool<Postgres>,
    business_id: Uuid,
    weekday: i16,
) -> Result<Option<DbWorkingHours>> {
    let hours = sqlx::query_as::<_, DbWorkingHours>(
        r#"
        SELECT id, business_id, weekday, start_time, end_time
        FROM working_hours
        WHERE business_id = $1 AND weekday = $2
        "#,
    )
    .bind(business_id)
    .bind(weekday)
    .fetch_optional(pool)
    .await?;

    Ok(hours)
}

pub async fn get_all(pool: &Pool<Postgres>, business_id: Uuid) -> Result<Vec<DbWorkingHours>> {
    let hours = sqlx::query_as::<_, DbWorkingHours>(
        r#"
        SELECT id, business_id, weekday, start_time, end_time
        FROM working_hours
        WHERE business_id = $1
        ORDER BY weekday ASC
        "#,
    )
    .bind(business_id)
    .fetch_all(pool)
    .await?;

    Ok(hours)
}

/// Inserts or replaces the single row for (business, weekday). Times are
/// already normalized to UTC by the caller.
pub async fn upsert(
    pool: &Pool<Postgres>,
    business_id: Uuid,
    weekday: i16,
    start_time: NaiveTime,
    end_time: NaiveTime,
) -> Result<DbWorkingHours> {
    let id = Uuid::new_v4();

    tracing::debug!(
        "Upserting working hours: business_id={}, weekday={}, {}-{}",
        business_id,
        weekday,
        start_time,
        end_time
    );

    let hours = sqlx::query_as::<_, DbWorkingHours>(
        r#"
        INSERT INTO working_hours (id, business_id, weekday, start_time, end_time)
        VALUES ($1, $2, $3, $4, $5)
        ON CONFLICT (business_id, weekday)
        DO UPDATE SET start_time = EXCLUDED.start_time, end_time = EXCLUDED.end_time
        RETURNING id, business_id, weekday, start_time, end_time
        "#,
    )
    .bind(id)
    .bind(business_id)
    .bind(weekday)
    .bind(start_time)
    .bind(end_time)
    .fetch_one(pool)
    .await?;

    Ok(hours)
}

/// Removes the weekday's row; returns false when there was nothing to
/// delete.
pub async fn delete(pool: &Pool<Postgres>, business_id: Uuid, weekday: i16) -> Result<bool> {
    let result = sqlx::query(
        r#"
        DELETE FROM working_hours
        WHERE business_id = $1 AND weekday = $2
        "#,
    )
    .bind(business_id)
    .bind(weekday)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}
