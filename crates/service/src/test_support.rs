#![cfg(test)]
use migration::MigratorTrait;
use models::db::{connect_with_config, DatabaseConfig};
use sea_orm::DatabaseConnection;

/// Fresh in-memory database with the album table migrated.
pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    let db = connect_with_config(&DatabaseConfig::sqlite_memory()).await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}

/// In-memory database with no schema at all.
pub async fn get_empty_db() -> Result<DatabaseConnection, anyhow::Error> {
    Ok(connect_with_config(&DatabaseConfig::sqlite_memory()).await?)
}
