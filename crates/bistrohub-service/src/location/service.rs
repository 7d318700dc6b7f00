//! Location service — audited franchise location CRUD.

use std::sync::Arc;

use tracing::{error, info};
use uuid::Uuid;

use bistrohub_core::error::AppError;
use bistrohub_core::result::AppResult;
use bistrohub_core::types::pagination::{PageRequest, PageResponse};
use bistrohub_database::repositories::location::LocationRepository;
use bistrohub_entity::location::{CreateLocation, Location, UpdateLocation};

use crate::audit::{ChangeLogService, FieldSnapshot};
use crate::context::RequestContext;

/// Handles franchise location administration, with audited updates.
#[derive(Debug, Clone)]
pub struct LocationService {
    location_repo: Arc<LocationRepository>,
    change_log: Arc<ChangeLogService>,
}

impl LocationService {
    /// Creates a new location service.
    pub fn new(location_repo: Arc<LocationRepository>, change_log: Arc<ChangeLogService>) -> Self {
        Self {
            location_repo,
            change_log,
        }
    }

    /// Lists locations.
    pub async fn list(&self, page: &PageRequest) -> AppResult<PageResponse<Location>> {
        self.location_repo.find_all(page).await
    }

    /// Fetches one location.
    pub async fn get(&self, id: Uuid) -> AppResult<Location> {
        self.location_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Location not found"))
    }

    /// Creates a location.
    pub async fn create(&self, data: CreateLocation) -> AppResult<Location> {
        if data.name.trim().is_empty() {
            return Err(AppError::validation("Location name is required"));
        }

        let location = self.location_repo.create(&data).await?;
        info!(location_id = %location.id, name = %location.name, "Location created");
        Ok(location)
    }

    /// Updates a location and records the resulting field changes.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        data: UpdateLocation,
    ) -> AppResult<Location> {
        let mut location = self.get(id).await?;
        let previous = FieldSnapshot::capture(&location);

        if let Some(name) = data.name {
            if name.trim().is_empty() {
                return Err(AppError::validation("Location name cannot be empty"));
            }
            location.name = name;
        }
        if let Some(address_line1) = data.address_line1 {
            location.address_line1 = address_line1;
        }
        if let Some(address_line2) = data.address_line2 {
            location.address_line2 = Some(address_line2);
        }
        if let Some(city) = data.city {
            location.city = city;
        }
        if let Some(state) = data.state {
            location.state = state;
        }
        if let Some(postal_code) = data.postal_code {
            location.postal_code = postal_code;
        }
        if let Some(phone) = data.phone {
            location.phone = Some(phone);
        }

        let location = self.location_repo.update(&location).await?;

        match (previous, FieldSnapshot::capture(&location)) {
            (Ok(previous), Ok(next)) => {
                self.change_log
                    .record_changes(ctx.actor_id, "location", location.id, &previous, &next)
                    .await;
            }
            (Err(e), _) | (_, Err(e)) => {
                error!(location_id = %location.id, error = %e, "Failed to capture audit snapshot");
            }
        }

        Ok(location)
    }

    /// Deletes a location. Orders referencing it fall back to no location.
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        if !self.location_repo.delete(id).await? {
            return Err(AppError::not_found("Location not found"));
        }
        info!(location_id = %id, "Location deleted");
        Ok(())
    }
}
