//! Order and line-item entity models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::status::OrderStatus;
use crate::serde_helpers::double_option;

/// A customer order.
///
/// `subtotal`, `tax`, and `total` are computed once at checkout and never
/// change afterwards; only `status`, `special_instructions`, and
/// `location_id` may be mutated by back-office updates.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Order {
    /// Unique order identifier.
    pub id: Uuid,
    /// Customer display name.
    pub customer_name: String,
    /// Customer email address.
    pub email: String,
    /// Customer phone number.
    pub phone: String,
    /// Delivery address, first line.
    pub address_line1: String,
    /// Delivery address, second line.
    pub address_line2: Option<String>,
    /// Delivery city.
    pub city: String,
    /// Delivery state or province.
    pub state: String,
    /// Delivery postal code.
    pub postal_code: String,
    /// Free-form delivery or preparation notes.
    pub special_instructions: Option<String>,
    /// Current lifecycle state.
    pub status: OrderStatus,
    /// Sum of line subtotals.
    pub subtotal: Decimal,
    /// Sales tax on the subtotal.
    pub tax: Decimal,
    /// Grand total (`subtotal + tax`, rounded).
    pub total: Decimal,
    /// Fulfilling franchise location.
    pub location_id: Option<Uuid>,
    /// The user who owns this record.
    pub owner_id: Option<Uuid>,
    /// Soft-enable flag.
    pub enabled: bool,
    /// When the order was placed.
    pub created_at: DateTime<Utc>,
    /// When the order was last updated.
    pub updated_at: DateTime<Utc>,
}

/// A single line of an order, carrying a frozen snapshot of the catalog
/// item at purchase time.
///
/// `name_snapshot`, `image_url_snapshot`, and `unit_price` never change,
/// even if the referenced menu item is later edited or deleted (the
/// foreign key nulls out on delete).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct OrderLineItem {
    /// Unique line-item identifier.
    pub id: Uuid,
    /// The order this line belongs to.
    pub order_id: Uuid,
    /// The catalog item this line was priced from, if it still exists.
    pub menu_item_id: Option<Uuid>,
    /// Catalog item name at order time.
    pub name_snapshot: String,
    /// Catalog item image reference at order time.
    pub image_url_snapshot: Option<String>,
    /// Requested quantity (floored at 1).
    pub quantity: i32,
    /// Catalog unit price at order time.
    pub unit_price: Decimal,
    /// When the line was created.
    pub created_at: DateTime<Utc>,
}

/// An order together with its line items, as returned by checkout and reads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderWithItems {
    /// The order row.
    #[serde(flatten)]
    pub order: Order,
    /// The order's line items.
    pub items: Vec<OrderLineItem>,
}

/// Data required to insert a new order row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateOrder {
    /// Customer display name.
    pub customer_name: String,
    /// Customer email address.
    pub email: String,
    /// Customer phone number.
    pub phone: String,
    /// Delivery address, first line.
    pub address_line1: String,
    /// Delivery address, second line.
    pub address_line2: Option<String>,
    /// Delivery city.
    pub city: String,
    /// Delivery state or province.
    pub state: String,
    /// Delivery postal code.
    pub postal_code: String,
    /// Free-form notes.
    pub special_instructions: Option<String>,
    /// Computed subtotal.
    pub subtotal: Decimal,
    /// Computed tax.
    pub tax: Decimal,
    /// Computed total.
    pub total: Decimal,
    /// Fulfilling franchise location.
    pub location_id: Option<Uuid>,
    /// Owning user.
    pub owner_id: Option<Uuid>,
}

/// An order line ready for insertion — the pricing engine's per-line output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLineDraft {
    /// The catalog item this line was priced from.
    pub menu_item_id: Uuid,
    /// Catalog item name at pricing time.
    pub name_snapshot: String,
    /// Catalog item image reference at pricing time.
    pub image_url_snapshot: Option<String>,
    /// Effective quantity (floored at 1).
    pub quantity: i32,
    /// Catalog unit price at pricing time.
    pub unit_price: Decimal,
}

/// Data for updating an existing order. `None` fields are left untouched;
/// `location_id` distinguishes "absent" from "explicitly null".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateOrder {
    /// New lifecycle state.
    pub status: Option<OrderStatus>,
    /// New free-form notes.
    pub special_instructions: Option<String>,
    /// New fulfilling location (`Some(None)` clears it).
    #[serde(default, deserialize_with = "double_option")]
    pub location_id: Option<Option<Uuid>>,
}
