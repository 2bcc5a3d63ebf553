use anyhow::{Context, Result};
use dotenvy::dotenv;
use serde::Deserialize;

/// Deployment mode, read from `NODE_ENV`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    #[default]
    Production,
    Test,
}

impl Environment {
    pub fn is_development(&self) -> bool {
        matches!(self, Environment::Development)
    }
}

/// Configuration for the application
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Port the HTTP listener binds to
    #[serde(default = "default_port")]
    pub port: u16,

    /// Database connection URL. Only needed by the Postgres store.
    pub database_url: Option<String>,

    /// Size of the Postgres connection pool
    #[serde(default = "default_max_connections")]
    pub database_max_connections: u32,

    #[serde(default)]
    pub node_env: Environment,
}

fn default_port() -> u16 {
    5000
}

fn default_max_connections() -> u32 {
    5
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Variables from a `.env` file are loaded first if one exists, then the
    /// process environment is deserialized into `Config`.
    pub fn load() -> Result<Self> {
        dotenv().ok();

        let config = envy::from_env::<Config>().context("invalid environment configuration")?;

        Ok(config)
    }

    /// Get the database URL, failing if it was never configured
    pub fn database_url(&self) -> Result<&str> {
        self.database_url
            .as_deref()
            .context("DATABASE_URL must be set to use the Postgres store")
    }

    /// Whether the GraphiQL IDE should be served
    pub fn graphiql_enabled(&self) -> bool {
        self.node_env.is_development()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn from_pairs(pairs: &[(&str, &str)]) -> Config {
        envy::from_iter(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string())),
        )
        .unwrap()
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = from_pairs(&[]);
        assert_eq!(config.port, 5000);
        assert_eq!(config.database_max_connections, 5);
        assert_eq!(config.node_env, Environment::Production);
        assert!(config.database_url.is_none());
        assert!(config.database_url().is_err());
        assert!(!config.graphiql_enabled());
    }

    #[test]
    fn reads_environment_values() {
        let config = from_pairs(&[
            ("PORT", "8080"),
            ("DATABASE_URL", "postgres://localhost/projects"),
            ("NODE_ENV", "development"),
            ("DATABASE_MAX_CONNECTIONS", "12"),
        ]);
        assert_eq!(config.port, 8080);
        assert_eq!(config.database_url().unwrap(), "postgres://localhost/projects");
        assert_eq!(config.database_max_connections, 12);
        assert!(config.graphiql_enabled());
    }

    #[test]
    fn rejects_unknown_environment() {
        let result = envy::from_iter::<_, Config>(vec![(
            "NODE_ENV".to_string(),
            "staging".to_string(),
        )]);
        assert!(result.is_err());
    }
}
