use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;

use configs::DatabaseConfig;

/// Connect to an explicit URL.
///
/// `sqlite::memory:` databases live inside a single connection, so the pool is
/// pinned to one connection that is never recycled.
pub async fn connect_url(url: &str) -> anyhow::Result<DatabaseConnection> {
    let mut opts = ConnectOptions::new(url.to_string());
    if url.contains(":memory:") {
        opts.max_connections(1)
            .min_connections(1)
            .idle_timeout(Duration::from_secs(24 * 3600))
            .max_lifetime(Duration::from_secs(24 * 3600));
    }
    opts.sqlx_logging(false);
    let db = Database::connect(opts).await?;
    Ok(db)
}

/// Connect with pool settings taken from the `[database]` config section.
pub async fn connect_with_config(cfg: &DatabaseConfig) -> anyhow::Result<DatabaseConnection> {
    if cfg.url.contains(":memory:") {
        return connect_url(&cfg.url).await;
    }
    let mut opts = ConnectOptions::new(cfg.url.clone());
    opts.max_connections(cfg.max_connections)
        .min_connections(cfg.min_connections)
        .connect_timeout(Duration::from_secs(cfg.connect_timeout_secs))
        .acquire_timeout(Duration::from_secs(cfg.acquire_timeout_secs))
        .idle_timeout(Duration::from_secs(cfg.idle_timeout_secs))
        .max_lifetime(Duration::from_secs(cfg.max_lifetime_secs))
        .sqlx_logging(cfg.sqlx_logging);
    tracing::info!(
        event = "db_connect",
        max_connections = cfg.max_connections,
        min_connections = cfg.min_connections,
        "connecting to database"
    );
    let db = Database::connect(opts).await?;
    Ok(db)
}
