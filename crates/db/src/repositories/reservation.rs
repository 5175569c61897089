use crate::models::{DbBookedInterval, DbReservation, DbReservationDetail, DbService};
use chrono::{DateTime, Duration, NaiveDate, NaiveTime, TimeZone, Utc};
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

const DETAIL_COLUMNS: &str = "r.id, r.user_id, r.service_id, r.start_time, r.status, \
     s.name AS service_name, s.description AS service_description, \
     s.price AS service_price, s.duration_minutes AS service_duration_minutes, \
     s.service_group, e.id AS employee_id, e.name AS employee_name";

/// Creates a reservation, enforcing the no-overlap invariant at write time.
///
/// The overlap check and the insert run in one transaction holding a row
/// lock on the employee, so two competing bookings for the same employee
/// serialize: the second one re-checks against the first one's committed row
/// and loses. Returns `None` on conflict; the slot list a client saw earlier
/// is advisory only, this check is the authority.
pub async fn create_reservation(
    pool: &Pool<Postgres>,
    user_id: Uuid,
    service: &DbService,
    start_time: DateTime<Utc>,
    status: &str,
) -> Result<Option<DbReservation>> {
    let end_time = start_time + Duration::minutes(service.duration_minutes as i64);

    let mut tx = pool.begin().await?;

    // Per-employee mutual exclusion; bookings for other employees are not
    // serialized by this lock.
    sqlx::query("SELECT id FROM employees WHERE id = $1 FOR UPDATE")
        .bind(service.employee_id)
        .fetch_optional(&mut *tx)
        .await?;

    // Half-open overlap against every non-cancelled reservation of the
    // employee, each with its own service duration.
    let conflict = sqlx::query_scalar::<_, bool>(
        r#"
        SELECT EXISTS (
            SELECT 1
            FROM reservations r
            JOIN services s ON s.id = r.service_id
            WHERE s.employee_id = $1
              AND r.status <> 'cancelled'
              AND r.start_time < $3
              AND $2 < r.start_time + make_interval(mins => s.duration_minutes)
        )
        "#,
    )
    .bind(service.employee_id)
    .bind(start_time)
    .bind(end_time)
    .fetch_one(&mut *tx)
    .await?;

    if conflict {
        tracing::debug!(
            "Slot conflict: employee_id={}, start={}",
            service.employee_id,
            start_time
        );
        // Dropping the transaction rolls it back and releases the lock.
        return Ok(None);
    }

    let id = Uuid::new_v4();
    let reservation = sqlx::query_as::<_, DbReservation>(
        r#"
        INSERT INTO reservations (id, user_id, service_id, start_time, status)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, user_id, service_id, start_time, status, created_at
        "#,
    )
    .bind(id)
    .bind(user_id)
    .bind(service.id)
    .bind(start_time)
    .bind(status)
    .fetch_one(&mut *tx)
    .await?;

    tx.commit().await?;

    tracing::debug!("Reservation created: id={}, start={}", id, start_time);
    Ok(Some(reservation))
}

pub async fn get_reservation_by_id(
    pool: &Pool<Postgres>,
    id: Uuid,
) -> Result<Option<DbReservation>> {
    let reservation = sqlx::query_as::<_, DbReservation>(
        r#"
        SELECT id, user_id, service_id, start_time, status, created_at
        FROM reservations
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(reservation)
}

/// Terminal status transition. The row is kept; cancelling twice is a
/// no-op at this layer.
pub async fn cancel_reservation(pool: &Pool<Postgres>, id: Uuid) -> Result<DbReservation> {
    let reservation = sqlx::query_as::<_, DbReservation>(
        r#"
        UPDATE reservations
        SET status = 'cancelled'
        WHERE id = $1
        RETURNING id, user_id, service_id, start_time, status, created_at
        "#,
    )
    .bind(id)
    .fetch_one(pool)
    .await?;

    Ok(reservation)
}

/// Active reservations of one employee on one UTC calendar day, as
/// start/duration pairs for the availability calculator.
pub async fn list_active_intervals_for_employee_on_date(
    pool: &Pool<Postgres>,
    employee_id: Uuid,
    date: NaiveDate,
) -> Result<Vec<DbBookedInterval>> {
    let (day_start, day_end) = utc_day_window(date);

    let intervals = sqlx::query_as::<_, DbBookedInterval>(
        r#"
        SELECT r.start_time, s.duration_minutes
        FROM reservations r
        JOIN services s ON s.id = r.service_id
        WHERE s.employee_id = $1
          AND r.status = 'active'
          AND r.start_time >= $2
          AND r.start_time < $3
        ORDER BY r.start_time ASC
        "#,
    )
    .bind(employee_id)
    .bind(day_start)
    .bind(day_end)
    .fetch_all(pool)
    .await?;

    Ok(intervals)
}

pub async fn list_for_user(
    pool: &Pool<Postgres>,
    user_id: Uuid,
) -> Result<Vec<DbReservationDetail>> {
    let reservations = sqlx::query_as::<_, DbReservationDetail>(&format!(
        r#"
        SELECT {DETAIL_COLUMNS}
        FROM reservations r
        JOIN services s ON s.id = r.service_id
        JOIN employees e ON e.id = s.employee_id
        WHERE r.user_id = $1
        ORDER BY r.start_time ASC
        "#
    ))
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    Ok(reservations)
}

pub async fn list_for_business_on_date(
    pool: &Pool<Postgres>,
    business_id: Uuid,
    date: NaiveDate,
) -> Result<Vec<DbReservationDetail>> {
    let (day_start, day_end) = utc_day_window(date);

    let reservations = sqlx::query_as::<_, DbReservationDetail>(&format!(
        r#"
        SELECT {DETAIL_COLUMNS}
        FROM reservations r
        JOIN services s ON s.id = r.service_id
        JOIN employees e ON e.id = s.employee_id
        WHERE s.business_id = $1
          AND r.start_time >= $2
          AND r.start_time < $3
        ORDER BY e.name ASC, r.start_time ASC
        "#
    ))
    .bind(business_id)
    .bind(day_start)
    .bind(day_end)
    .fetch_all(pool)
    .await?;

    Ok(reservations)
}

fn utc_day_window(date: NaiveDate) -> (DateTime<Utc>, DateTime<Utc>) {
    let start = Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN));
    (start, start + Duration::days(1))
}
