//! BistroHub Server — Franchise Operations Platform
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use bistrohub_core::config::AppConfig;
use bistrohub_core::error::AppError;

#[tokio::main]
async fn main() {
    let env = std::env::var("BISTROHUB_ENV").unwrap_or_else(|_| "development".to_string());

    let config = match AppConfig::load(&env) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {e}");
        std::process::exit(1);
    }
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
        _ => {
            fmt().pretty().with_env_filter(filter).with_target(true).init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting BistroHub v{}", env!("CARGO_PKG_VERSION"));

    // ── Step 1: Database connection + migrations ─────────────────
    let db_pool = bistrohub_database::connection::create_pool(&config.database).await?;
    bistrohub_database::migration::run_migrations(&db_pool).await?;

    // ── Step 2: Initialize repositories ──────────────────────────
    let menu_repo = Arc::new(
        bistrohub_database::repositories::menu_item::MenuItemRepository::new(db_pool.clone()),
    );
    let location_repo = Arc::new(
        bistrohub_database::repositories::location::LocationRepository::new(db_pool.clone()),
    );
    let order_repo = Arc::new(bistrohub_database::repositories::order::OrderRepository::new(
        db_pool.clone(),
    ));
    let change_record_repo = Arc::new(
        bistrohub_database::repositories::change_record::ChangeRecordRepository::new(
            db_pool.clone(),
        ),
    );
    let request_log_repo = Arc::new(
        bistrohub_database::repositories::request_log::RequestLogRepository::new(db_pool.clone()),
    );

    // ── Step 3: Initialize services ──────────────────────────────
    let change_log_service = Arc::new(bistrohub_service::audit::ChangeLogService::new(Arc::clone(
        &change_record_repo,
    )));
    let pricing = bistrohub_service::pricing::PricingEngine::new(config.order.tax_rate_decimal()?);
    let order_service = Arc::new(bistrohub_service::order::OrderService::new(
        db_pool.clone(),
        Arc::clone(&order_repo),
        Arc::clone(&menu_repo),
        pricing,
    ));
    let menu_service = Arc::new(bistrohub_service::menu::MenuService::new(
        Arc::clone(&menu_repo),
        Arc::clone(&change_log_service),
    ));
    let location_service = Arc::new(bistrohub_service::location::LocationService::new(
        Arc::clone(&location_repo),
        Arc::clone(&change_log_service),
    ));

    // ── Step 4: Build and start HTTP server ──────────────────────
    let app_state = bistrohub_api::state::AppState {
        config: Arc::new(config.clone()),
        db_pool: db_pool.clone(),
        menu_repo,
        location_repo,
        order_repo,
        change_record_repo,
        request_log_repo,
        menu_service,
        location_service,
        order_service,
        change_log_service,
    };

    let app = bistrohub_api::router::build_router(app_state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("BistroHub server listening on {addr}");

    let server = axum::serve(listener, app).with_graceful_shutdown(async move {
        shutdown_signal().await;
        tracing::info!("Shutdown signal received, starting graceful shutdown...");
    });

    server
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    db_pool.close().await;
    tracing::info!("BistroHub server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
