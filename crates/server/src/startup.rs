use std::{future::Future, net::SocketAddr, sync::Arc};

use axum::Router;
use configs::{AppConfig, StorageBackend};
use migration::MigratorTrait;
use service::{landing_page::FileLandingPage, AppServices};
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::errors::StartupError;
use crate::routes;
use crate::state::ServerState;

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

fn bind_addr(cfg: &AppConfig) -> anyhow::Result<SocketAddr> {
    let addr: SocketAddr = format!("{}:{}", cfg.server.host, cfg.server.port)
        .parse()
        .map_err(|e| StartupError::InvalidConfig(format!("bind address: {e}")))?;
    Ok(addr)
}

/// Select the storage backend and landing page source from config.
pub async fn build_services(cfg: &AppConfig) -> anyhow::Result<AppServices> {
    let services = match cfg.storage.backend {
        StorageBackend::Memory => {
            info!(event = "storage_selected", backend = "memory", "using in-memory storage");
            AppServices::in_memory()
        }
        StorageBackend::Database => {
            let db = models::db::connect_with_config(&cfg.database)
                .await
                .map_err(|e| StartupError::Database(e.to_string()))?;
            if cfg.storage.run_migrations {
                migration::Migrator::up(&db, None)
                    .await
                    .map_err(|e| StartupError::Database(e.to_string()))?;
                info!(event = "migrations_applied", "database migrations applied");
            } else {
                warn!(event = "migrations_skipped", "storage.run_migrations is false");
            }
            info!(event = "storage_selected", backend = "database", "using database storage");
            AppServices::with_database(db)
        }
    };

    Ok(match &cfg.landing_page.content_path {
        Some(path) => {
            info!(event = "landing_page_source", path = %path, "serving landing page from file");
            services.with_landing_page(Arc::new(FileLandingPage::new(path)))
        }
        None => services,
    })
}

pub fn build_app(services: AppServices) -> Router {
    routes::build_router(ServerState::new(services), build_cors())
}

/// Resolves on Ctrl+C.
pub async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(event = "signal_error", error = %e, "failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
    info!(event = "shutdown_signal", "received Ctrl+C, shutting down");
}

/// Serve with an already loaded config until `shutdown` resolves.
pub async fn serve<F>(cfg: AppConfig, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let services = build_services(&cfg).await?;
    let app = build_app(services);

    let addr = bind_addr(&cfg)?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, event = "listening", "pizzeria server listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;
    Ok(())
}
