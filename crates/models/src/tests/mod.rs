
/// Relation definitions and bulk inserts
pub mod relation_tests;

use anyhow::Result;
use configs::DatabaseConfig;
use migration::MigratorTrait;
use sea_orm::DatabaseConnection;

/// Fresh in-memory database with the schema applied.
pub(crate) async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = crate::db::connect_with_config(&DatabaseConfig::default()).await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}
