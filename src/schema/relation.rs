use anyhow::Result;

use crate::db::RecordStore;
use crate::models::{Client, Project};

/// Look up the client a project points at.
///
/// A project whose client no longer exists yields `Ok(None)`.
pub async fn client_of(project: &Project, store: &dyn RecordStore) -> Result<Option<Client>> {
    let client = store.find_client(project.client_id).await?;

    if client.is_none() {
        tracing::debug!(
            project_id = %project.id,
            client_id = %project.client_id,
            "project references a missing client"
        );
    }

    Ok(client)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::MemoryStore;
    use crate::models::{NewClient, NewProject, ProjectStatus};
    use uuid::Uuid;

    #[tokio::test]
    async fn resolves_existing_client() {
        let store = MemoryStore::new();
        let client = store
            .create_client(NewClient {
                name: "Acme".to_string(),
                email: "a@x.com".to_string(),
                phone: "555".to_string(),
            })
            .await
            .unwrap();
        let project = store
            .create_project(NewProject {
                name: "Site".to_string(),
                description: "redo".to_string(),
                status: ProjectStatus::NotStarted,
                client_id: client.id,
            })
            .await
            .unwrap();

        assert_eq!(client_of(&project, &store).await.unwrap(), Some(client));
    }

    #[tokio::test]
    async fn dangling_reference_is_not_an_error() {
        let store = MemoryStore::new();
        let project = NewProject {
            name: "Orphan".to_string(),
            description: String::new(),
            status: ProjectStatus::Completed,
            client_id: Uuid::new_v4(),
        }
        .into_project(Uuid::new_v4());

        assert_eq!(client_of(&project, &store).await.unwrap(), None);
    }
}
