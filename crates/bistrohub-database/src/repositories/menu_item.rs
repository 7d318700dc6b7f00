//! Menu item repository implementation.

use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

use bistrohub_core::error::{AppError, ErrorKind};
use bistrohub_core::result::AppResult;
use bistrohub_core::types::pagination::{PageRequest, PageResponse};
use bistrohub_entity::menu::{CreateMenuItem, MenuItem};

/// Repository for menu item CRUD and catalog lookups.
#[derive(Debug, Clone)]
pub struct MenuItemRepository {
    pool: PgPool,
}

impl MenuItemRepository {
    /// Create a new menu item repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a menu item by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<MenuItem>> {
        sqlx::query_as::<_, MenuItem>("SELECT * FROM menu_items WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find menu item by id", e)
            })
    }

    /// Resolve menu items by id inside an open checkout transaction.
    ///
    /// Returns only the rows that exist; the caller compares counts to
    /// detect unknown ids.
    pub async fn find_by_ids(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        ids: &[Uuid],
    ) -> AppResult<Vec<MenuItem>> {
        sqlx::query_as::<_, MenuItem>("SELECT * FROM menu_items WHERE id = ANY($1)")
            .bind(ids)
            .fetch_all(&mut **tx)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to resolve menu items", e)
            })
    }

    /// List menu items with optional category filter, newest first.
    pub async fn find_all(
        &self,
        category: Option<&str>,
        page: &PageRequest,
    ) -> AppResult<PageResponse<MenuItem>> {
        let (count_sql, select_sql) = match category {
            Some(_) => (
                "SELECT COUNT(*) FROM menu_items WHERE category = $1",
                "SELECT * FROM menu_items WHERE category = $1 \
                 ORDER BY created_at DESC LIMIT $2 OFFSET $3",
            ),
            None => (
                "SELECT COUNT(*) FROM menu_items",
                "SELECT * FROM menu_items ORDER BY created_at DESC LIMIT $1 OFFSET $2",
            ),
        };

        let mut count_query = sqlx::query_scalar::<_, i64>(count_sql);
        let mut select_query = sqlx::query_as::<_, MenuItem>(select_sql);
        if let Some(c) = category {
            count_query = count_query.bind(c.to_string());
            select_query = select_query.bind(c.to_string());
        }

        let total = count_query
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count menu items", e))?;

        let items = select_query
            .bind(page.limit() as i64)
            .bind(page.offset() as i64)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list menu items", e))?;

        Ok(PageResponse::new(
            items,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// Create a menu item.
    pub async fn create(&self, data: &CreateMenuItem) -> AppResult<MenuItem> {
        sqlx::query_as::<_, MenuItem>(
            "INSERT INTO menu_items \
             (name, description, category, price, image_url, is_halal, prep_time_minutes, servings, owner_id) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) RETURNING *",
        )
        .bind(&data.name)
        .bind(&data.description)
        .bind(&data.category)
        .bind(data.price)
        .bind(&data.image_url)
        .bind(data.is_halal)
        .bind(data.prep_time_minutes)
        .bind(&data.servings)
        .bind(data.owner_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create menu item", e))
    }

    /// Persist all mutable fields of a menu item.
    pub async fn update(&self, item: &MenuItem) -> AppResult<MenuItem> {
        sqlx::query_as::<_, MenuItem>(
            "UPDATE menu_items SET \
             name = $2, description = $3, category = $4, price = $5, image_url = $6, \
             is_halal = $7, prep_time_minutes = $8, servings = $9, rating = $10, \
             updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(item.id)
        .bind(&item.name)
        .bind(&item.description)
        .bind(&item.category)
        .bind(item.price)
        .bind(&item.image_url)
        .bind(item.is_halal)
        .bind(item.prep_time_minutes)
        .bind(&item.servings)
        .bind(item.rating)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update menu item", e))
    }

    /// Delete a menu item. Returns whether a row was removed.
    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM menu_items WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete menu item", e)
            })?;
        Ok(result.rows_affected() > 0)
    }
}
