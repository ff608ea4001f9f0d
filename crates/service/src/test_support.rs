#![cfg(test)]
use migration::MigratorTrait;
use sea_orm::DatabaseConnection;

/// A fresh, migrated in-memory sqlite database per call.
pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    let db = models::db::connect_url("sqlite::memory:").await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}
