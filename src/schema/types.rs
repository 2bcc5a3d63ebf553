use async_graphql::{Context, ID, Object, Result};

use super::{relation, store};
use crate::error::gateway_error;
use crate::models::{Client, Project};

#[Object]
impl Client {
    async fn id(&self) -> ID {
        ID(self.id.to_string())
    }

    async fn name(&self) -> &str {
        &self.name
    }

    async fn email(&self) -> &str {
        &self.email
    }

    async fn phone(&self) -> &str {
        &self.phone
    }
}

#[Object]
impl Project {
    async fn id(&self) -> ID {
        ID(self.id.to_string())
    }

    async fn name(&self) -> &str {
        &self.name
    }

    async fn description(&self) -> &str {
        &self.description
    }

    /// One of `Not Started`, `In Progress`, `Completed`.
    async fn status(&self) -> &'static str {
        self.status.as_str()
    }

    async fn client_id(&self) -> ID {
        ID(self.client_id.to_string())
    }

    /// The owning client, or null once that client has been deleted.
    async fn client(&self, ctx: &Context<'_>) -> Result<Option<Client>> {
        relation::client_of(self, store(ctx)?)
            .await
            .map_err(gateway_error)
    }
}
