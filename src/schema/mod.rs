//! GraphQL type graph over clients and projects.
//!
//! The schema is built once at startup by [`build_schema`] and handed to the
//! HTTP layer; resolvers reach the store through the schema data.

mod mutation;
mod query;
pub mod relation;
mod types;

use std::sync::Arc;

use async_graphql::{Context, EmptySubscription, ID, Schema};
use uuid::Uuid;

use crate::db::{MemoryStore, RecordStore, SharedStore};

pub use mutation::MutationRoot;
pub use query::QueryRoot;

pub type ProjectSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(store: SharedStore) -> ProjectSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(store)
        .finish()
}

/// Render the schema as SDL. Needs no configuration or database.
pub fn sdl() -> String {
    build_schema(Arc::new(MemoryStore::new())).sdl()
}

fn store<'a>(ctx: &Context<'a>) -> async_graphql::Result<&'a dyn RecordStore> {
    Ok(ctx.data::<SharedStore>()?.as_ref())
}

/// Ids are UUIDs; anything else cannot name a stored record.
fn parse_id(id: &ID) -> Option<Uuid> {
    Uuid::parse_str(id.as_str()).ok()
}
