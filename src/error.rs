//! Error taxonomy surfaced at the GraphQL boundary.

use async_graphql::ErrorExtensions;
use thiserror::Error;

/// Input rejected before any store call is issued.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("unknown project status `{0}`")]
    UnknownStatus(String),

    #[error("argument `{field}` is not a valid id: `{value}`")]
    MalformedId { field: &'static str, value: String },
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The store was unreachable or rejected the operation. The underlying
    /// message is kept as-is for operators.
    #[error("{0:#}")]
    Gateway(anyhow::Error),
}

impl ApiError {
    pub fn code(&self) -> &'static str {
        match self {
            ApiError::Validation(_) => "VALIDATION_ERROR",
            ApiError::Gateway(_) => "GATEWAY_FAILURE",
        }
    }
}

impl ErrorExtensions for ApiError {
    fn extend(&self) -> async_graphql::Error {
        let code = self.code();
        async_graphql::Error::new(self.to_string()).extend_with(|_, e| e.set("code", code))
    }
}

/// Convert a store failure into a GraphQL field error.
pub fn gateway_error(err: anyhow::Error) -> async_graphql::Error {
    ApiError::Gateway(err).extend()
}

/// Convert a rejected input into a GraphQL field error.
pub fn validation_error(err: ValidationError) -> async_graphql::Error {
    ApiError::Validation(err).extend()
}
