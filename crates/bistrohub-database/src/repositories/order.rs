//! Order repository implementation.
//!
//! Checkout inserts run against an open transaction supplied by the order
//! service; everything the service writes becomes visible only at commit.

use std::collections::HashMap;

use sqlx::{PgPool, Postgres, QueryBuilder, Transaction};
use uuid::Uuid;

use bistrohub_core::error::{AppError, ErrorKind};
use bistrohub_core::result::AppResult;
use bistrohub_core::types::pagination::{PageRequest, PageResponse};
use bistrohub_entity::order::{
    CreateOrder, Order, OrderLineDraft, OrderLineItem, OrderStatus, OrderWithItems,
};

/// Repository for orders and their line items.
#[derive(Debug, Clone)]
pub struct OrderRepository {
    pool: PgPool,
}

impl OrderRepository {
    /// Create a new order repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert the order row inside an open checkout transaction.
    pub async fn insert_order(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        data: &CreateOrder,
    ) -> AppResult<Order> {
        sqlx::query_as::<_, Order>(
            "INSERT INTO orders \
             (customer_name, email, phone, address_line1, address_line2, city, state, \
              postal_code, special_instructions, subtotal, tax, total, location_id, owner_id) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14) RETURNING *",
        )
        .bind(&data.customer_name)
        .bind(&data.email)
        .bind(&data.phone)
        .bind(&data.address_line1)
        .bind(&data.address_line2)
        .bind(&data.city)
        .bind(&data.state)
        .bind(&data.postal_code)
        .bind(&data.special_instructions)
        .bind(data.subtotal)
        .bind(data.tax)
        .bind(data.total)
        .bind(data.location_id)
        .bind(data.owner_id)
        .fetch_one(&mut **tx)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to insert order", e))
    }

    /// Batch-insert the order's line items inside the same transaction.
    pub async fn insert_line_items(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order_id: Uuid,
        lines: &[OrderLineDraft],
    ) -> AppResult<()> {
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(
            "INSERT INTO order_items \
             (order_id, menu_item_id, name_snapshot, image_url_snapshot, quantity, unit_price) ",
        );
        builder.push_values(lines, |mut row, line| {
            row.push_bind(order_id)
                .push_bind(line.menu_item_id)
                .push_bind(&line.name_snapshot)
                .push_bind(&line.image_url_snapshot)
                .push_bind(line.quantity)
                .push_bind(line.unit_price);
        });

        builder
            .build()
            .execute(&mut **tx)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to insert order items", e)
            })?;

        Ok(())
    }

    /// Fetch an order together with its line items.
    pub async fn find_with_items(&self, id: Uuid) -> AppResult<Option<OrderWithItems>> {
        let Some(order) = sqlx::query_as::<_, Order>("SELECT * FROM orders WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find order by id", e)
            })?
        else {
            return Ok(None);
        };

        let items = sqlx::query_as::<_, OrderLineItem>(
            "SELECT * FROM order_items WHERE order_id = $1 ORDER BY created_at, id",
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to load order items", e))?;

        Ok(Some(OrderWithItems { order, items }))
    }

    /// List orders with optional status filter, newest first, line items
    /// attached.
    pub async fn find_all(
        &self,
        status: Option<OrderStatus>,
        page: &PageRequest,
    ) -> AppResult<PageResponse<OrderWithItems>> {
        let (count_sql, select_sql) = match status {
            Some(_) => (
                "SELECT COUNT(*) FROM orders WHERE status = $1",
                "SELECT * FROM orders WHERE status = $1 \
                 ORDER BY created_at DESC LIMIT $2 OFFSET $3",
            ),
            None => (
                "SELECT COUNT(*) FROM orders",
                "SELECT * FROM orders ORDER BY created_at DESC LIMIT $1 OFFSET $2",
            ),
        };

        let mut count_query = sqlx::query_scalar::<_, i64>(count_sql);
        let mut select_query = sqlx::query_as::<_, Order>(select_sql);
        if let Some(s) = status {
            count_query = count_query.bind(s);
            select_query = select_query.bind(s);
        }

        let total = count_query
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count orders", e))?;

        let orders = select_query
            .bind(page.limit() as i64)
            .bind(page.offset() as i64)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list orders", e))?;

        let order_ids: Vec<Uuid> = orders.iter().map(|o| o.id).collect();
        let items = sqlx::query_as::<_, OrderLineItem>(
            "SELECT * FROM order_items WHERE order_id = ANY($1) ORDER BY created_at, id",
        )
        .bind(&order_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to load order items", e))?;

        let mut items_by_order: HashMap<Uuid, Vec<OrderLineItem>> = HashMap::new();
        for item in items {
            items_by_order.entry(item.order_id).or_default().push(item);
        }

        let combined = orders
            .into_iter()
            .map(|order| {
                let items = items_by_order.remove(&order.id).unwrap_or_default();
                OrderWithItems { order, items }
            })
            .collect();

        Ok(PageResponse::new(
            combined,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// Persist the mutable fields of an order (status, instructions, location).
    pub async fn update(&self, order: &Order) -> AppResult<Order> {
        sqlx::query_as::<_, Order>(
            "UPDATE orders SET \
             status = $2, special_instructions = $3, location_id = $4, updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(order.id)
        .bind(order.status)
        .bind(&order.special_instructions)
        .bind(order.location_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update order", e))
    }

    /// Delete an order; line items cascade. Returns whether a row was removed.
    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM orders WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete order", e))?;
        Ok(result.rows_affected() > 0)
    }
}
