//! Project Tracker
//!
//! A GraphQL API over projects and the clients they belong to.

pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod logging;
pub mod models;
pub mod schema;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};

pub use config::Config;
use db::SharedStore;
use schema::{ProjectSchema, build_schema};

/// Shared state handed to every HTTP handler
#[derive(Clone)]
pub struct AppState {
    pub schema: ProjectSchema,
    pub store: SharedStore,
    pub config: Arc<Config>,
}

impl AppState {
    /// Connect to Postgres and build the schema on top of it
    pub async fn new(config: Config) -> Result<Self> {
        let db = db::init(&config).await?;
        Ok(Self::with_store(config, Arc::new(db)))
    }

    /// Build state over an already constructed store
    pub fn with_store(config: Config, store: SharedStore) -> Self {
        Self {
            schema: build_schema(store.clone()),
            store,
            config: Arc::new(config),
        }
    }
}

/// Bind the listener and serve until the process is stopped
pub async fn start_server(state: AppState) -> Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], state.config.port));
    let graphiql = state.config.graphiql_enabled();
    let app = api::create_router(state);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    tracing::info!(%addr, graphiql, "server running");
    axum::serve(listener, app).await?;

    Ok(())
}
