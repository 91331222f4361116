//! Tri-List Backend
//!
//! Layered architecture:
//! - domain: Items, the table allow-list, delete selectors
//! - repository: Storage gateway over the three list tables
//! - service: List use cases (list all, add, edit, delete)
//! - view: Page view model and HTML rendering
//! - routes: HTTP handlers

use anyhow::{Context, Result};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

pub mod config;
pub mod domain;
pub mod repository;
pub mod routes;
pub mod service;
pub mod view;

pub use config::AppConfig;
pub use routes::{build_router, AppState};

use repository::{connect_with_retry, SqliteListStore};
use service::ListService;

/// Connect to storage, then serve until Ctrl-C or SIGTERM
///
/// The listener is bound only after the database is ready; if the database
/// cannot be opened within the retry budget, this returns an error.
pub async fn run(config: AppConfig) -> Result<()> {
    let conn = connect_with_retry(&config.database_path, config.retry_policy())
        .await
        .with_context(|| format!("database unavailable at {}", config.database_path.display()))?;

    let lists = ListService::new(Arc::new(SqliteListStore::new(conn)));
    let app = build_router(AppState::new(lists), &config.static_dir);

    let listener = TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;
    info!(addr = %config.bind_addr, "Server running");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                tokio::select! {
                    _ = sigterm.recv() => {}
                    _ = tokio::signal::ctrl_c() => {}
                }
            }
            Err(_) => {
                let _ = tokio::signal::ctrl_c().await;
            }
        }
    }

    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
}
