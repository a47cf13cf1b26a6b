use std::time::Duration;

use configs::DatabaseConfig;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection};
use tracing::info;

// An in-memory SQLite database belongs to the connection that created it,
// so the pool must keep exactly one connection alive for the whole process.
const IN_MEMORY_LIFETIME: Duration = Duration::from_secs(60 * 60 * 24 * 365);

pub fn connect_options(cfg: &DatabaseConfig) -> ConnectOptions {
    let mut opt = ConnectOptions::new(cfg.url.clone());
    opt.connect_timeout(Duration::from_secs(cfg.connect_timeout_secs))
        .acquire_timeout(Duration::from_secs(cfg.acquire_timeout_secs))
        .sqlx_logging(cfg.sqlx_logging);
    if cfg.is_in_memory() {
        opt.max_connections(1)
            .min_connections(1)
            .idle_timeout(IN_MEMORY_LIFETIME)
            .max_lifetime(IN_MEMORY_LIFETIME);
    } else {
        opt.max_connections(cfg.max_connections)
            .min_connections(cfg.min_connections)
            .idle_timeout(Duration::from_secs(cfg.idle_timeout_secs))
            .max_lifetime(Duration::from_secs(cfg.max_lifetime_secs));
    }
    opt
}

pub async fn connect_with_config(cfg: &DatabaseConfig) -> anyhow::Result<DatabaseConnection> {
    let db = Database::connect(connect_options(cfg)).await?;
    info!(in_memory = cfg.is_in_memory(), backend = ?db.get_database_backend(), "database connected");
    Ok(db)
}

