use async_graphql::{Context, ID, Object, Result};

use super::{parse_id, store};
use crate::error::gateway_error;
use crate::models::{Client, Project};

#[derive(Default)]
pub struct QueryRoot;

#[Object(name = "RootQueryType")]
impl QueryRoot {
    async fn projects(&self, ctx: &Context<'_>) -> Result<Vec<Project>> {
        store(ctx)?.list_projects().await.map_err(gateway_error)
    }

    async fn project(&self, ctx: &Context<'_>, id: Option<ID>) -> Result<Option<Project>> {
        let Some(id) = id.as_ref().and_then(parse_id) else {
            return Ok(None);
        };
        store(ctx)?.find_project(id).await.map_err(gateway_error)
    }

    async fn clients(&self, ctx: &Context<'_>) -> Result<Vec<Client>> {
        store(ctx)?.list_clients().await.map_err(gateway_error)
    }

    async fn client(&self, ctx: &Context<'_>, id: Option<ID>) -> Result<Option<Client>> {
        let Some(id) = id.as_ref().and_then(parse_id) else {
            return Ok(None);
        };
        store(ctx)?.find_client(id).await.map_err(gateway_error)
    }
}
