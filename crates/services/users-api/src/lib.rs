//! Users API Library
//!
//! HTTP CRUD service for the users resource. Handlers call a
//! [`UserRepository`](repository::UserRepository) and answer with the
//! `{success, data}` envelope.

pub mod config;
pub mod extractors;
pub mod handlers;
pub mod openapi;
pub mod repository;
pub mod routes;
pub mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use tracing::info;

use crate::config::UsersApiConfig;
use crate::repository::InMemoryUserStore;
use crate::routes::create_router;
use crate::state::AppState;

/// Build the store described by `config` and serve until shutdown.
pub async fn run_server(config: UsersApiConfig) -> Result<(), Box<dyn std::error::Error>> {
    let store = match &config.seed_file {
        Some(path) => InMemoryUserStore::from_seed_file(path).await?,
        None => InMemoryUserStore::new(),
    };
    info!("User store ready with {} user(s)", store.len().await);

    let addr: SocketAddr = config.service.addr().parse()?;
    let state = AppState::new(Arc::new(store), config);
    let app = create_router(state);

    info!("Users API listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Users API stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}
