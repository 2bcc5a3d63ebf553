//! HTTP surface for the GraphQL schema

pub mod handlers;
pub mod routes;

pub use routes::create_router;
