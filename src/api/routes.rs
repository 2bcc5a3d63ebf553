//! API route definitions

use super::handlers;
use crate::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

/// Create the API router
///
/// `GET /graphql` serves GraphiQL only when the config enables it.
pub fn create_router(state: AppState) -> Router {
    let graphql = if state.config.graphiql_enabled() {
        get(handlers::graphiql).post(handlers::graphql)
    } else {
        post(handlers::graphql)
    };

    Router::new()
        .route("/health", get(handlers::health))
        .route("/graphql", graphql)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, Environment};
    use crate::db::MemoryStore;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use serde_json::{json, Value};
    use std::sync::Arc;
    use tower::ServiceExt; // for `oneshot`

    fn test_config(node_env: Environment) -> Config {
        Config {
            port: 0,
            database_url: None,
            database_max_connections: 1,
            node_env,
        }
    }

    fn test_app(node_env: Environment) -> Router {
        let state = AppState::with_store(test_config(node_env), Arc::new(MemoryStore::new()));
        create_router(state)
    }

    async fn body_json(resp: axum::response::Response) -> Value {
        let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    fn graphql_request(body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/graphql")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health_reports_ok() {
        let app = test_app(Environment::Production);
        let req = Request::builder().uri("/health").body(Body::empty()).unwrap();

        let resp = app.oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        let body = body_json(resp).await;
        assert_eq!(body["status"], "ok");
        assert!(body["version"].is_string());
    }

    #[tokio::test]
    async fn test_post_graphql_executes_mutation() {
        let app = test_app(Environment::Production);
        let req = graphql_request(json!({
            "query": r#"mutation { addClient(name: "Acme", email: "a@x.com", phone: "555") { id name } }"#
        }));

        let resp = app.oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        let body = body_json(resp).await;
        assert_eq!(body["data"]["addClient"]["name"], "Acme");
        assert!(body.get("errors").is_none());
    }

    #[tokio::test]
    async fn test_validation_failure_is_a_normal_response() {
        let app = test_app(Environment::Production);
        let req = graphql_request(json!({
            "query": r#"mutation { addClient(name: "Acme", email: "a@x.com") { id } }"#
        }));

        let resp = app.oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        let body = body_json(resp).await;
        assert!(body["data"].is_null());
        assert!(!body["errors"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_graphiql_only_in_development() {
        let get_ide = || Request::builder().uri("/graphql").body(Body::empty()).unwrap();

        let resp = test_app(Environment::Development)
            .oneshot(get_ide())
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        let resp = test_app(Environment::Production)
            .oneshot(get_ide())
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
