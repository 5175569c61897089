use chrono::{DateTime, NaiveTime, Utc, Weekday};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbBusiness {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub category: String,
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub region: String,
    pub city: String,
    pub street: String,
    pub building_number: String,
    pub room_number: String,
    pub postal_code: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbEmployee {
    pub id: Uuid,
    pub business_id: Uuid,
    pub name: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbService {
    pub id: Uuid,
    pub employee_id: Uuid,
    pub business_id: Uuid,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub duration_minutes: i32,
    pub is_featured: bool,
    pub service_group: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Weekday is stored as a smallint, 0 = Monday .. 6 = Sunday.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbWorkingHours {
    pub id: Uuid,
    pub business_id: Uuid,
    pub weekday: i16,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
}

/// Reservation row. Status is plain text at this layer (`active`, `pending`,
/// `cancelled`); the API boundary converts it to the domain enum.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbReservation {
    pub id: Uuid,
    pub user_id: Uuid,
    pub service_id: Uuid,
    pub start_time: DateTime<Utc>,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

/// Reservation joined with its service and employee, for listings.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbReservationDetail {
    pub id: Uuid,
    pub user_id: Uuid,
    pub service_id: Uuid,
    pub start_time: DateTime<Utc>,
    pub status: String,
    pub service_name: String,
    pub service_description: String,
    pub service_price: Decimal,
    pub service_duration_minutes: i32,
    pub service_group: Option<String>,
    pub employee_id: Uuid,
    pub employee_name: String,
}

/// Start plus duration of a blocking reservation, the calculator's input.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbBookedInterval {
    pub start_time: DateTime<Utc>,
    pub duration_minutes: i32,
}

/// The fully resolved service -> employee -> business chain. Produced by one
/// lookup and consumed by both the availability handler and the reservation
/// ledger, so the resolution logic cannot diverge.
#[derive(Debug, Clone)]
pub struct BookingContext {
    pub business: DbBusiness,
    pub employee: DbEmployee,
    pub service: DbService,
}

/// Outcome of resolving a [`BookingContext`], naming the first broken link.
#[derive(Debug, Clone)]
pub enum ContextLookup {
    Found(BookingContext),
    MissingService,
    MissingEmployee,
    MissingBusiness,
}

pub fn weekday_to_db(weekday: Weekday) -> i16 {
    weekday.num_days_from_monday() as i16
}

pub fn weekday_from_db(value: i16) -> Weekday {
    match value.rem_euclid(7) {
        0 => Weekday::Mon,
        1 => Weekday::Tue,
        2 => Weekday::Wed,
        3 => Weekday::Thu,
        4 => Weekday::Fri,
        5 => Weekday::Sat,
        _ => Weekday::Sun,
    }
}
