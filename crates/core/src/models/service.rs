use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Service {
    pub id: Uuid,
    pub employee_id: Uuid,
    pub business_id: Uuid,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub duration_minutes: i32,
    pub is_featured: bool,
    pub group: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateServiceRequest {
    pub employee_id: Uuid,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub duration_minutes: i32,
    #[serde(default)]
    pub is_featured: bool,
    pub group: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateServiceRequest {
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub duration_minutes: i32,
    pub is_featured: bool,
    pub group: Option<String>,
}

/// Compact service projection embedded in reservation listings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceSummary {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub duration_minutes: i32,
    pub group: Option<String>,
}
