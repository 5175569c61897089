use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Postal address of a business, stored inline with the business record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub region: String,
    pub city: String,
    pub street: String,
    pub building_number: String,
    pub room_number: String,
    pub postal_code: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Business {
    pub id: Uuid,
    /// Stable id of the owning user, issued by the upstream identity provider.
    pub owner_id: Uuid,
    pub category: String,
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub address: Address,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBusinessRequest {
    pub category: String,
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub address: Address,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateBusinessRequest {
    pub category: String,
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub address: Address,
}
