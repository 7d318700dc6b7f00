//! Menu item entity model.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A sellable menu entry — the catalog source of truth referenced at order time.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct MenuItem {
    /// Unique menu item identifier.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Customer-facing description.
    pub description: String,
    /// Menu category (e.g. `"mains"`, `"sides"`, `"drinks"`).
    pub category: String,
    /// Unit price.
    pub price: Decimal,
    /// Display image reference (optional).
    pub image_url: Option<String>,
    /// Whether the item is certified halal.
    pub is_halal: bool,
    /// Typical preparation time in minutes.
    pub prep_time_minutes: Option<i32>,
    /// Serving size description (e.g. `"serves 2-3"`).
    pub servings: Option<String>,
    /// Average customer rating.
    pub rating: Option<Decimal>,
    /// The user who owns this record.
    pub owner_id: Option<Uuid>,
    /// Soft-enable flag.
    pub enabled: bool,
    /// When the item was created.
    pub created_at: DateTime<Utc>,
    /// When the item was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a new menu item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateMenuItem {
    /// Display name.
    pub name: String,
    /// Customer-facing description.
    pub description: String,
    /// Menu category.
    pub category: String,
    /// Unit price.
    pub price: Decimal,
    /// Display image reference.
    pub image_url: Option<String>,
    /// Halal certification flag.
    pub is_halal: bool,
    /// Typical preparation time in minutes.
    pub prep_time_minutes: Option<i32>,
    /// Serving size description.
    pub servings: Option<String>,
    /// Owning user.
    pub owner_id: Option<Uuid>,
}

/// Data for updating an existing menu item. `None` fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateMenuItem {
    /// New display name.
    pub name: Option<String>,
    /// New description.
    pub description: Option<String>,
    /// New category.
    pub category: Option<String>,
    /// New unit price.
    pub price: Option<Decimal>,
    /// New image reference.
    pub image_url: Option<String>,
    /// New halal flag.
    pub is_halal: Option<bool>,
    /// New preparation time.
    pub prep_time_minutes: Option<i32>,
    /// New serving size description.
    pub servings: Option<String>,
    /// New rating.
    pub rating: Option<Decimal>,
}
