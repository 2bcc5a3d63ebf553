//! Persistence gateway consumed by the GraphQL layer.

mod memory;
mod postgres;

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use uuid::Uuid;

use crate::config::Config;
use crate::models::{Client, NewClient, NewProject, Project, ProjectPatch};

pub use memory::MemoryStore;
pub use postgres::Database;

/// Record store holding clients and projects.
///
/// Every method is a single-record operation. Lookups, updates and deletes
/// that target a missing id return `Ok(None)`; `Err` is reserved for the
/// store itself failing.
#[async_trait]
pub trait RecordStore: Send + Sync {
    // Clients
    async fn create_client(&self, client: NewClient) -> Result<Client>;
    async fn list_clients(&self) -> Result<Vec<Client>>;
    async fn find_client(&self, id: Uuid) -> Result<Option<Client>>;
    async fn delete_client(&self, id: Uuid) -> Result<Option<Client>>;

    // Projects
    async fn create_project(&self, project: NewProject) -> Result<Project>;
    async fn list_projects(&self) -> Result<Vec<Project>>;
    async fn find_project(&self, id: Uuid) -> Result<Option<Project>>;
    async fn update_project(&self, id: Uuid, patch: ProjectPatch) -> Result<Option<Project>>;
    async fn delete_project(&self, id: Uuid) -> Result<Option<Project>>;

    /// Check that the store is reachable
    async fn health_check(&self) -> Result<()>;
}

pub type SharedStore = Arc<dyn RecordStore>;

/// Connect to Postgres and bring the schema up to date
pub async fn init(config: &Config) -> Result<Database> {
    let db = Database::new(config).await?;

    db.migrate().await?;

    Ok(db)
}
