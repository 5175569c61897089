use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{employee::EmployeeSummary, service::ServiceSummary};

/// Lifecycle state of a reservation.
///
/// `Pending` and `Active` both hold the slot; `Cancelled` is terminal and
/// releases it. Cancelled rows are kept for the audit trail, never deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReservationStatus {
    Active,
    Pending,
    Cancelled,
}

impl ReservationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReservationStatus::Active => "active",
            ReservationStatus::Pending => "pending",
            ReservationStatus::Cancelled => "cancelled",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "active" => ReservationStatus::Active,
            "cancelled" => ReservationStatus::Cancelled,
            _ => ReservationStatus::Pending,
        }
    }

    /// Whether a reservation in this state still blocks its time interval.
    pub fn blocks_slot(&self) -> bool {
        !matches!(self, ReservationStatus::Cancelled)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reservation {
    pub id: Uuid,
    pub user_id: Uuid,
    pub service_id: Uuid,
    pub start_time: DateTime<Utc>,
    pub status: ReservationStatus,
    pub created_at: DateTime<Utc>,
}

/// Booking request as sent by a client: a wall-clock start in the client's
/// own timezone. The handler normalizes it to UTC before touching the ledger.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateReservationRequest {
    pub service_id: Uuid,
    pub start_local: NaiveDateTime,
    pub timezone: String,
    /// Initial state, `active` (default) or `pending`.
    pub status: Option<ReservationStatus>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReservationResponse {
    pub id: Uuid,
    pub service_id: Uuid,
    pub start_time: DateTime<Utc>,
    pub status: ReservationStatus,
    pub created_at: DateTime<Utc>,
}

/// One reservation in the caller's own booking list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserReservation {
    pub id: Uuid,
    pub start_time: DateTime<Utc>,
    pub status: ReservationStatus,
    pub service: ServiceSummary,
    pub employee: EmployeeSummary,
}

/// Reservations of one business on one day, grouped per employee.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeDayReservations {
    pub employee: EmployeeSummary,
    pub reservations: Vec<BusinessDayReservation>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BusinessDayReservation {
    pub id: Uuid,
    pub start_time: DateTime<Utc>,
    pub status: ReservationStatus,
    pub service: ServiceSummary,
}
