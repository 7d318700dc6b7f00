//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use sqlx::PgPool;

use bistrohub_core::config::AppConfig;
use bistrohub_database::repositories::change_record::ChangeRecordRepository;
use bistrohub_database::repositories::location::LocationRepository;
use bistrohub_database::repositories::menu_item::MenuItemRepository;
use bistrohub_database::repositories::order::OrderRepository;
use bistrohub_database::repositories::request_log::RequestLogRepository;
use bistrohub_service::audit::ChangeLogService;
use bistrohub_service::location::LocationService;
use bistrohub_service::menu::MenuService;
use bistrohub_service::order::OrderService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    /// Application configuration
    pub config: Arc<AppConfig>,

    // ── Infrastructure ───────────────────────────────────────
    /// PostgreSQL connection pool
    pub db_pool: PgPool,

    // ── Repositories ─────────────────────────────────────────
    /// Menu item repository
    pub menu_repo: Arc<MenuItemRepository>,
    /// Location repository
    pub location_repo: Arc<LocationRepository>,
    /// Order repository
    pub order_repo: Arc<OrderRepository>,
    /// Change record repository
    pub change_record_repo: Arc<ChangeRecordRepository>,
    /// Request log repository
    pub request_log_repo: Arc<RequestLogRepository>,

    // ── Services ─────────────────────────────────────────────
    /// Menu catalog service
    pub menu_service: Arc<MenuService>,
    /// Location service
    pub location_service: Arc<LocationService>,
    /// Order checkout and CRUD service
    pub order_service: Arc<OrderService>,
    /// Field-level change log service
    pub change_log_service: Arc<ChangeLogService>,
}
