//! Franchise location entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A franchise location.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Location {
    /// Unique location identifier.
    pub id: Uuid,
    /// Location name.
    pub name: String,
    /// Street address, first line.
    pub address_line1: String,
    /// Street address, second line.
    pub address_line2: Option<String>,
    /// City.
    pub city: String,
    /// State or province.
    pub state: String,
    /// Postal code.
    pub postal_code: String,
    /// Contact phone number.
    pub phone: Option<String>,
    /// The user who owns this record.
    pub owner_id: Option<Uuid>,
    /// Soft-enable flag.
    pub enabled: bool,
    /// When the location was created.
    pub created_at: DateTime<Utc>,
    /// When the location was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a new location.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateLocation {
    /// Location name.
    pub name: String,
    /// Street address, first line.
    pub address_line1: String,
    /// Street address, second line.
    pub address_line2: Option<String>,
    /// City.
    pub city: String,
    /// State or province.
    pub state: String,
    /// Postal code.
    pub postal_code: String,
    /// Contact phone number.
    pub phone: Option<String>,
    /// Owning user.
    pub owner_id: Option<Uuid>,
}

/// Data for updating an existing location. `None` fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateLocation {
    /// New location name.
    pub name: Option<String>,
    /// New street address, first line.
    pub address_line1: Option<String>,
    /// New street address, second line.
    pub address_line2: Option<String>,
    /// New city.
    pub city: Option<String>,
    /// New state or province.
    pub state: Option<String>,
    /// New postal code.
    pub postal_code: Option<String>,
    /// New contact phone number.
    pub phone: Option<String>,
}
