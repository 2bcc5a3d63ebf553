//! In-memory store, used by tests and `serve --in-memory`.

use anyhow::Result;
use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::RecordStore;
use crate::models::{Client, NewClient, NewProject, Project, ProjectPatch};

/// Stores records in `Vec`s behind async `RwLock`s, in insertion order.
#[derive(Default)]
pub struct MemoryStore {
    clients: RwLock<Vec<Client>>,
    projects: RwLock<Vec<Project>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn create_client(&self, client: NewClient) -> Result<Client> {
        let client = client.into_client(Uuid::new_v4());
        self.clients.write().await.push(client.clone());
        Ok(client)
    }

    async fn list_clients(&self) -> Result<Vec<Client>> {
        Ok(self.clients.read().await.clone())
    }

    async fn find_client(&self, id: Uuid) -> Result<Option<Client>> {
        let clients = self.clients.read().await;
        Ok(clients.iter().find(|c| c.id == id).cloned())
    }

    async fn delete_client(&self, id: Uuid) -> Result<Option<Client>> {
        let mut clients = self.clients.write().await;
        let removed = clients
            .iter()
            .position(|c| c.id == id)
            .map(|index| clients.remove(index));
        Ok(removed)
    }

    async fn create_project(&self, project: NewProject) -> Result<Project> {
        let project = project.into_project(Uuid::new_v4());
        self.projects.write().await.push(project.clone());
        Ok(project)
    }

    async fn list_projects(&self) -> Result<Vec<Project>> {
        Ok(self.projects.read().await.clone())
    }

    async fn find_project(&self, id: Uuid) -> Result<Option<Project>> {
        let projects = self.projects.read().await;
        Ok(projects.iter().find(|p| p.id == id).cloned())
    }

    async fn update_project(&self, id: Uuid, patch: ProjectPatch) -> Result<Option<Project>> {
        let mut projects = self.projects.write().await;
        let Some(project) = projects.iter_mut().find(|p| p.id == id) else {
            return Ok(None);
        };
        patch.apply_to(project);
        Ok(Some(project.clone()))
    }

    async fn delete_project(&self, id: Uuid) -> Result<Option<Project>> {
        let mut projects = self.projects.write().await;
        let removed = projects
            .iter()
            .position(|p| p.id == id)
            .map(|index| projects.remove(index));
        Ok(removed)
    }

    async fn health_check(&self) -> Result<()> {
        Ok(())
    }
}
