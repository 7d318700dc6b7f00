//! Location repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use bistrohub_core::error::{AppError, ErrorKind};
use bistrohub_core::result::AppResult;
use bistrohub_core::types::pagination::{PageRequest, PageResponse};
use bistrohub_entity::location::{CreateLocation, Location};

/// Repository for franchise location CRUD.
#[derive(Debug, Clone)]
pub struct LocationRepository {
    pool: PgPool,
}

impl LocationRepository {
    /// Create a new location repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a location by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Location>> {
        sqlx::query_as::<_, Location>("SELECT * FROM locations WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find location by id", e)
            })
    }

    /// List locations, newest first.
    pub async fn find_all(&self, page: &PageRequest) -> AppResult<PageResponse<Location>> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM locations")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count locations", e)
            })?;

        let locations = sqlx::query_as::<_, Location>(
            "SELECT * FROM locations ORDER BY created_at DESC LIMIT $1 OFFSET $2",
        )
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list locations", e))?;

        Ok(PageResponse::new(
            locations,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// Create a location.
    pub async fn create(&self, data: &CreateLocation) -> AppResult<Location> {
        sqlx::query_as::<_, Location>(
            "INSERT INTO locations \
             (name, address_line1, address_line2, city, state, postal_code, phone, owner_id) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) RETURNING *",
        )
        .bind(&data.name)
        .bind(&data.address_line1)
        .bind(&data.address_line2)
        .bind(&data.city)
        .bind(&data.state)
        .bind(&data.postal_code)
        .bind(&data.phone)
        .bind(data.owner_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create location", e))
    }

    /// Persist all mutable fields of a location.
    pub async fn update(&self, location: &Location) -> AppResult<Location> {
        sqlx::query_as::<_, Location>(
            "UPDATE locations SET \
             name = $2, address_line1 = $3, address_line2 = $4, city = $5, state = $6, \
             postal_code = $7, phone = $8, updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(location.id)
        .bind(&location.name)
        .bind(&location.address_line1)
        .bind(&location.address_line2)
        .bind(&location.city)
        .bind(&location.state)
        .bind(&location.postal_code)
        .bind(&location.phone)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update location", e))
    }

    /// Delete a location. Returns whether a row was removed.
    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM locations WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete location", e)
            })?;
        Ok(result.rows_affected() > 0)
    }
}
