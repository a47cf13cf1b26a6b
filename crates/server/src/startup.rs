use axum::Router;
use configs::AppConfig;
use migration::{Migrator, MigratorTrait};
use sea_orm::DatabaseConnection;
use service::seed::{self, Fixtures};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::errors::StartupError;
use crate::routes;
use crate::state::AppState;

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Bring the schema up to date, then load fixtures when enabled.
/// A failed seed aborts startup instead of serving a half-initialized store.
pub async fn prepare_store(db: &DatabaseConnection, seed_enabled: bool) -> Result<(), StartupError> {
    Migrator::up(db, None)
        .await
        .map_err(|e| StartupError::Migration(e.to_string()))?;
    info!("migrations applied");

    if seed_enabled {
        let report = seed::load(db, Fixtures::embedded()?).await?;
        info!(users = report.users, orders = report.orders, offers = report.offers, "store seeded");
    } else {
        info!("seeding disabled");
    }
    Ok(())
}

/// Connect, migrate, seed and assemble the router. Used by `run` and by tests.
pub async fn build_app(cfg: &AppConfig) -> anyhow::Result<Router> {
    let db = models::db::connect_with_config(&cfg.database).await?;
    prepare_store(&db, cfg.seed.enabled).await?;
    Ok(routes::build_router(AppState::new(db), build_cors()))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "ctrl_c handler unavailable; graceful shutdown disabled");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}

/// Public entry: build the app and serve until Ctrl+C.
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    let app = build_app(&cfg).await?;

    let listener = TcpListener::bind((cfg.server.host.as_str(), cfg.server.port)).await?;
    let addr = listener.local_addr()?;
    info!(%addr, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("server stopped");
    Ok(())
}
