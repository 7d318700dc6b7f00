//! Menu item service — audited catalog CRUD.

use std::sync::Arc;

use tracing::{error, info};
use uuid::Uuid;

use bistrohub_core::error::AppError;
use bistrohub_core::result::AppResult;
use bistrohub_core::types::pagination::{PageRequest, PageResponse};
use bistrohub_database::repositories::menu_item::MenuItemRepository;
use bistrohub_entity::menu::{CreateMenuItem, MenuItem, UpdateMenuItem};

use crate::audit::{ChangeLogService, FieldSnapshot};
use crate::context::RequestContext;

/// Handles menu catalog administration.
///
/// Updates follow the audit protocol: load, capture a before-snapshot,
/// apply field changes, save, capture an after-snapshot, and hand both to
/// the change log.
#[derive(Debug, Clone)]
pub struct MenuService {
    menu_repo: Arc<MenuItemRepository>,
    change_log: Arc<ChangeLogService>,
}

impl MenuService {
    /// Creates a new menu service.
    pub fn new(menu_repo: Arc<MenuItemRepository>, change_log: Arc<ChangeLogService>) -> Self {
        Self {
            menu_repo,
            change_log,
        }
    }

    /// Lists menu items with an optional category filter.
    pub async fn list(
        &self,
        category: Option<&str>,
        page: &PageRequest,
    ) -> AppResult<PageResponse<MenuItem>> {
        self.menu_repo.find_all(category, page).await
    }

    /// Fetches one menu item.
    pub async fn get(&self, id: Uuid) -> AppResult<MenuItem> {
        self.menu_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Menu item not found"))
    }

    /// Creates a menu item.
    pub async fn create(&self, data: CreateMenuItem) -> AppResult<MenuItem> {
        if data.name.trim().is_empty() {
            return Err(AppError::validation("Menu item name is required"));
        }
        if data.price.is_sign_negative() {
            return Err(AppError::validation("Menu item price cannot be negative"));
        }

        let item = self.menu_repo.create(&data).await?;
        info!(menu_item_id = %item.id, name = %item.name, "Menu item created");
        Ok(item)
    }

    /// Updates a menu item and records the resulting field changes.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        data: UpdateMenuItem,
    ) -> AppResult<MenuItem> {
        let mut item = self.get(id).await?;
        let previous = FieldSnapshot::capture(&item);

        if let Some(name) = data.name {
            if name.trim().is_empty() {
                return Err(AppError::validation("Menu item name cannot be empty"));
            }
            item.name = name;
        }
        if let Some(description) = data.description {
            item.description = description;
        }
        if let Some(category) = data.category {
            item.category = category;
        }
        if let Some(price) = data.price {
            if price.is_sign_negative() {
                return Err(AppError::validation("Menu item price cannot be negative"));
            }
            item.price = price;
        }
        if let Some(image_url) = data.image_url {
            item.image_url = Some(image_url);
        }
        if let Some(is_halal) = data.is_halal {
            item.is_halal = is_halal;
        }
        if let Some(prep_time_minutes) = data.prep_time_minutes {
            item.prep_time_minutes = Some(prep_time_minutes);
        }
        if let Some(servings) = data.servings {
            item.servings = Some(servings);
        }
        if let Some(rating) = data.rating {
            item.rating = Some(rating);
        }

        let item = self.menu_repo.update(&item).await?;

        match (previous, FieldSnapshot::capture(&item)) {
            (Ok(previous), Ok(next)) => {
                self.change_log
                    .record_changes(ctx.actor_id, "menu_item", item.id, &previous, &next)
                    .await;
            }
            (Err(e), _) | (_, Err(e)) => {
                error!(menu_item_id = %item.id, error = %e, "Failed to capture audit snapshot");
            }
        }

        Ok(item)
    }

    /// Deletes a menu item. Existing order lines keep their snapshots.
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        if !self.menu_repo.delete(id).await? {
            return Err(AppError::not_found("Menu item not found"));
        }
        info!(menu_item_id = %id, "Menu item deleted");
        Ok(())
    }
}
