//! Order service — the checkout transaction coordinator plus order CRUD.
//!
//! Checkout runs four gated phases: validate the request shape, resolve the
//! catalog inside a transaction, price, and persist the order with its line
//! items. Phases 2–4 share one transaction; any failure rolls it back before
//! the error propagates, so a partial order is never visible.

use std::collections::HashSet;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use sqlx::{PgPool, Postgres, Transaction};
use tracing::{error, info};
use uuid::Uuid;
use validator::Validate;

use bistrohub_core::error::AppError;
use bistrohub_core::result::AppResult;
use bistrohub_core::types::pagination::{PageRequest, PageResponse};
use bistrohub_database::repositories::menu_item::MenuItemRepository;
use bistrohub_database::repositories::order::OrderRepository;
use bistrohub_entity::order::{CreateOrder, Order, OrderStatus, OrderWithItems, UpdateOrder};

use crate::pricing::{LineRequest, PricingEngine};

/// A storefront checkout request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CheckoutRequest {
    /// Customer display name.
    #[validate(length(min = 1, message = "Customer name is required"))]
    pub customer_name: String,
    /// Customer email address.
    #[validate(email(message = "A valid email is required"))]
    pub email: String,
    /// Customer phone number.
    #[validate(length(min = 1, message = "Phone is required"))]
    pub phone: String,
    /// Delivery address, first line.
    #[validate(length(min = 1, message = "Address is required"))]
    pub address_line1: String,
    /// Delivery address, second line.
    pub address_line2: Option<String>,
    /// Delivery city.
    #[validate(length(min = 1, message = "City is required"))]
    pub city: String,
    /// Delivery state or province.
    #[validate(length(min = 1, message = "State is required"))]
    pub state: String,
    /// Delivery postal code.
    #[validate(length(min = 1, message = "Postal code is required"))]
    pub postal_code: String,
    /// Free-form delivery or preparation notes.
    pub special_instructions: Option<String>,
    /// Requested lines; must be non-empty.
    #[validate(length(min = 1, message = "Order must include at least one item"))]
    pub items: Vec<LineRequest>,
    /// Fulfilling franchise location.
    pub location_id: Option<Uuid>,
    /// Owning user (filled in upstream for authenticated callers).
    #[serde(default)]
    pub owner_id: Option<Uuid>,
}

/// Coordinates checkout and back-office order operations.
#[derive(Debug, Clone)]
pub struct OrderService {
    pool: PgPool,
    order_repo: Arc<OrderRepository>,
    menu_repo: Arc<MenuItemRepository>,
    pricing: PricingEngine,
}

impl OrderService {
    /// Creates a new order service.
    pub fn new(
        pool: PgPool,
        order_repo: Arc<OrderRepository>,
        menu_repo: Arc<MenuItemRepository>,
        pricing: PricingEngine,
    ) -> Self {
        Self {
            pool,
            order_repo,
            menu_repo,
            pricing,
        }
    }

    /// Places an order: validate, resolve, price, and persist atomically.
    ///
    /// Either the order and all of its line items commit together, or
    /// nothing is persisted at all.
    pub async fn checkout(&self, req: CheckoutRequest) -> AppResult<OrderWithItems> {
        // Phase 1: request shape. Nothing has touched the database yet.
        req.validate()
            .map_err(|e| AppError::validation(format!("Invalid checkout request: {e}")))?;

        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| AppError::database(format!("Failed to open transaction: {e}")))?;

        let order = match self.checkout_in_tx(&mut tx, &req).await {
            Ok(order) => {
                tx.commit()
                    .await
                    .map_err(|e| AppError::database(format!("Failed to commit order: {e}")))?;
                order
            }
            Err(e) => {
                if let Err(rollback_err) = tx.rollback().await {
                    error!(error = %rollback_err, "Failed to roll back checkout transaction");
                }
                return Err(e);
            }
        };

        info!(order_id = %order.id, total = %order.total, "Order placed");

        self.order_repo
            .find_with_items(order.id)
            .await?
            .ok_or_else(|| AppError::internal("Committed order could not be reloaded"))
    }

    /// Phases 2–4 of checkout, run against the open transaction.
    async fn checkout_in_tx(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        req: &CheckoutRequest,
    ) -> AppResult<Order> {
        // Phase 2: resolve the catalog. Every distinct id must exist.
        let distinct_ids: Vec<Uuid> = req
            .items
            .iter()
            .map(|line| line.menu_item_id)
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();

        let catalog = self.menu_repo.find_by_ids(tx, &distinct_ids).await?;
        if catalog.len() != distinct_ids.len() {
            return Err(AppError::invalid_items("One or more menu items are invalid"));
        }

        // Phase 3: price.
        let priced = self.pricing.price(&req.items, &catalog)?;

        // Phase 4: persist the order and its lines.
        let order = self
            .order_repo
            .insert_order(
                tx,
                &CreateOrder {
                    customer_name: req.customer_name.clone(),
                    email: req.email.clone(),
                    phone: req.phone.clone(),
                    address_line1: req.address_line1.clone(),
                    address_line2: req.address_line2.clone(),
                    city: req.city.clone(),
                    state: req.state.clone(),
                    postal_code: req.postal_code.clone(),
                    special_instructions: req.special_instructions.clone(),
                    subtotal: priced.subtotal,
                    tax: priced.tax,
                    total: priced.total,
                    location_id: req.location_id,
                    owner_id: req.owner_id,
                },
            )
            .await?;

        self.order_repo
            .insert_line_items(tx, order.id, &priced.lines)
            .await?;

        Ok(order)
    }

    /// Lists orders with an optional status filter.
    pub async fn list(
        &self,
        status: Option<OrderStatus>,
        page: &PageRequest,
    ) -> AppResult<PageResponse<OrderWithItems>> {
        self.order_repo.find_all(status, page).await
    }

    /// Fetches one order with its line items.
    pub async fn get(&self, id: Uuid) -> AppResult<OrderWithItems> {
        self.order_repo
            .find_with_items(id)
            .await?
            .ok_or_else(|| AppError::not_found("Order not found"))
    }

    /// Updates an order's mutable fields. Totals and snapshots never change.
    pub async fn update(&self, id: Uuid, data: UpdateOrder) -> AppResult<OrderWithItems> {
        let existing = self.get(id).await?;
        let mut order = existing.order;

        if let Some(status) = data.status {
            order.status = status;
        }
        if let Some(instructions) = data.special_instructions {
            order.special_instructions = Some(instructions);
        }
        if let Some(location_id) = data.location_id {
            order.location_id = location_id;
        }

        let order = self.order_repo.update(&order).await?;

        Ok(OrderWithItems {
            order,
            items: existing.items,
        })
    }

    /// Deletes an order; its line items cascade.
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        if !self.order_repo.delete(id).await? {
            return Err(AppError::not_found("Order not found"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> CheckoutRequest {
        CheckoutRequest {
            customer_name: "Amina Hassan".to_string(),
            email: "amina@example.com".to_string(),
            phone: "555-0134".to_string(),
            address_line1: "12 Crescent Ave".to_string(),
            address_line2: None,
            city: "Dearborn".to_string(),
            state: "MI".to_string(),
            postal_code: "48124".to_string(),
            special_instructions: None,
            items: vec![LineRequest {
                menu_item_id: Uuid::new_v4(),
                quantity: 1,
            }],
            location_id: None,
            owner_id: None,
        }
    }

    #[test]
    fn test_valid_request_passes_validation() {
        assert!(valid_request().validate().is_ok());
    }

    #[test]
    fn test_missing_required_fields_rejected() {
        let mut req = valid_request();
        req.customer_name = String::new();
        assert!(req.validate().is_err());

        let mut req = valid_request();
        req.email = "not-an-email".to_string();
        assert!(req.validate().is_err());

        let mut req = valid_request();
        req.postal_code = String::new();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_empty_item_list_rejected() {
        let mut req = valid_request();
        req.items.clear();
        assert!(req.validate().is_err());
    }
}
