//! Request DTOs with validation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use bistrohub_core::types::pagination::PageRequest;
use bistrohub_entity::location::CreateLocation;
use bistrohub_entity::menu::CreateMenuItem;
use bistrohub_entity::order::OrderStatus;

/// Create menu item request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateMenuItemRequest {
    /// Display name.
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    /// Customer-facing description.
    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,
    /// Menu category.
    #[validate(length(min = 1, message = "Category is required"))]
    pub category: String,
    /// Unit price.
    pub price: Decimal,
    /// Display image reference.
    pub image_url: Option<String>,
    /// Halal certification flag.
    #[serde(default = "default_true")]
    pub is_halal: bool,
    /// Typical preparation time in minutes.
    pub prep_time_minutes: Option<i32>,
    /// Serving size description.
    pub servings: Option<String>,
    /// Owning user (filled in upstream for authenticated callers).
    #[serde(default)]
    pub owner_id: Option<Uuid>,
}

impl From<CreateMenuItemRequest> for CreateMenuItem {
    fn from(req: CreateMenuItemRequest) -> Self {
        Self {
            name: req.name,
            description: req.description,
            category: req.category,
            price: req.price,
            image_url: req.image_url,
            is_halal: req.is_halal,
            prep_time_minutes: req.prep_time_minutes,
            servings: req.servings,
            owner_id: req.owner_id,
        }
    }
}

/// Create location request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateLocationRequest {
    /// Location name.
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    /// Street address, first line.
    #[validate(length(min = 1, message = "Address is required"))]
    pub address_line1: String,
    /// Street address, second line.
    pub address_line2: Option<String>,
    /// City.
    #[validate(length(min = 1, message = "City is required"))]
    pub city: String,
    /// State or province.
    #[validate(length(min = 1, message = "State is required"))]
    pub state: String,
    /// Postal code.
    #[validate(length(min = 1, message = "Postal code is required"))]
    pub postal_code: String,
    /// Contact phone number.
    pub phone: Option<String>,
    /// Owning user (filled in upstream for authenticated callers).
    #[serde(default)]
    pub owner_id: Option<Uuid>,
}

impl From<CreateLocationRequest> for CreateLocation {
    fn from(req: CreateLocationRequest) -> Self {
        Self {
            name: req.name,
            address_line1: req.address_line1,
            address_line2: req.address_line2,
            city: req.city,
            state: req.state,
            postal_code: req.postal_code,
            phone: req.phone,
            owner_id: req.owner_id,
        }
    }
}

/// Query parameters for listing orders.
#[derive(Debug, Clone, Deserialize)]
pub struct OrderListQuery {
    /// Filter by lifecycle state.
    pub status: Option<OrderStatus>,
    /// Page number (1-based).
    pub page: Option<u64>,
    /// Items per page.
    pub page_size: Option<u64>,
}

/// Query parameters for listing menu items.
#[derive(Debug, Clone, Deserialize)]
pub struct MenuListQuery {
    /// Filter by category.
    pub category: Option<String>,
    /// Page number (1-based).
    pub page: Option<u64>,
    /// Items per page.
    pub page_size: Option<u64>,
}

/// Query parameters for plain paginated listings.
#[derive(Debug, Clone, Deserialize)]
pub struct ListQuery {
    /// Page number (1-based).
    pub page: Option<u64>,
    /// Items per page.
    pub page_size: Option<u64>,
}

/// Query parameters for searching change records.
#[derive(Debug, Clone, Deserialize)]
pub struct ChangeLogQuery {
    /// Filter by acting user.
    pub actor_id: Option<Uuid>,
    /// Filter by model name.
    pub model_name: Option<String>,
    /// Filter by mutated record.
    pub record_id: Option<Uuid>,
    /// Page number (1-based).
    pub page: Option<u64>,
    /// Items per page.
    pub page_size: Option<u64>,
}

/// Query parameters for searching request logs.
#[derive(Debug, Clone, Deserialize)]
pub struct RequestLogQuery {
    /// Filter by acting user.
    pub actor_id: Option<Uuid>,
    /// Filter by route group.
    pub category: Option<String>,
    /// Filter by derived action.
    pub action: Option<String>,
    /// Page number (1-based).
    pub page: Option<u64>,
    /// Items per page.
    pub page_size: Option<u64>,
}

/// Build a [`PageRequest`] from optional query parameters.
pub fn page_request(page: Option<u64>, page_size: Option<u64>) -> PageRequest {
    PageRequest::from_params(page, page_size)
}

fn default_true() -> bool {
    true
}
