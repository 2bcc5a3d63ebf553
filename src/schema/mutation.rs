use async_graphql::{Context, ID, Object, Result};

use super::{parse_id, store};
use crate::error::{ValidationError, gateway_error, validation_error};
use crate::models::{Client, NewClient, NewProject, Project, ProjectPatch, ProjectStatus};

#[derive(Default)]
pub struct MutationRoot;

#[Object(name = "Mutation")]
impl MutationRoot {
    async fn add_client(
        &self,
        ctx: &Context<'_>,
        name: String,
        email: String,
        phone: String,
    ) -> Result<Option<Client>> {
        let client = store(ctx)?
            .create_client(NewClient { name, email, phone })
            .await
            .map_err(gateway_error)?;

        tracing::info!(client_id = %client.id, "client created");
        Ok(Some(client))
    }

    /// Remove a client. Its projects keep pointing at the removed id.
    async fn delete_client(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Client>> {
        let Some(id) = parse_id(&id) else {
            return Ok(None);
        };
        let removed = store(ctx)?.delete_client(id).await.map_err(gateway_error)?;

        if removed.is_some() {
            tracing::info!(client_id = %id, "client deleted");
        }
        Ok(removed)
    }

    async fn add_project(
        &self,
        ctx: &Context<'_>,
        name: String,
        description: String,
        #[graphql(desc = "Defaults to `new` (Not Started)")] status: Option<ProjectStatus>,
        client_id: ID,
    ) -> Result<Option<Project>> {
        let client_id = parse_id(&client_id).ok_or_else(|| {
            validation_error(ValidationError::MalformedId {
                field: "clientId",
                value: client_id.0.clone(),
            })
        })?;

        let project = store(ctx)?
            .create_project(NewProject {
                name,
                description,
                status: status.unwrap_or_default(),
                client_id,
            })
            .await
            .map_err(gateway_error)?;

        tracing::info!(project_id = %project.id, status = %project.status, "project created");
        Ok(Some(project))
    }

    async fn delete_project(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Project>> {
        let Some(id) = parse_id(&id) else {
            return Ok(None);
        };
        let removed = store(ctx)?.delete_project(id).await.map_err(gateway_error)?;

        if removed.is_some() {
            tracing::info!(project_id = %id, "project deleted");
        }
        Ok(removed)
    }

    /// Overwrite whichever of `name`, `description` and `status` are given.
    ///
    /// `clientId` must be supplied but is not written: a project cannot be
    /// moved to another client through this mutation.
    async fn update_project(
        &self,
        ctx: &Context<'_>,
        id: ID,
        name: Option<String>,
        description: Option<String>,
        status: Option<ProjectStatus>,
        client_id: ID,
    ) -> Result<Option<Project>> {
        let Some(id) = parse_id(&id) else {
            return Ok(None);
        };
        tracing::debug!(project_id = %id, client_id = %client_id.as_str(), "clientId is not part of the update set");

        let patch = ProjectPatch {
            name,
            description,
            status,
        };
        let updated = store(ctx)?
            .update_project(id, patch)
            .await
            .map_err(gateway_error)?;

        if updated.is_some() {
            tracing::info!(project_id = %id, "project updated");
        }
        Ok(updated)
    }
}
