use anyhow::{Context, Result};
use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use uuid::Uuid;

use super::RecordStore;
use crate::config::Config;
use crate::models::{Client, NewClient, NewProject, Project, ProjectPatch, ProjectStatus};

const PROJECT_COLUMNS: &str = "id, name, description, status, client_id";

/// Projects as stored: `status` is the persisted literal.
#[derive(sqlx::FromRow)]
struct ProjectRow {
    id: Uuid,
    name: String,
    description: String,
    status: String,
    client_id: Uuid,
}

impl TryFrom<ProjectRow> for Project {
    type Error = anyhow::Error;

    fn try_from(row: ProjectRow) -> Result<Self> {
        let status = row
            .status
            .parse::<ProjectStatus>()
            .with_context(|| format!("project {} has a corrupt status", row.id))?;

        Ok(Project {
            id: row.id,
            name: row.name,
            description: row.description,
            status,
            client_id: row.client_id,
        })
    }
}

/// Postgres-backed store over a connection pool
pub struct Database {
    pool: PgPool,
}

impl Database {
    /// Create a new Database instance with a connection pool
    pub async fn new(config: &Config) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(config.database_max_connections)
            .connect(config.database_url()?)
            .await
            .context("failed to connect to Postgres")?;

        tracing::info!(
            max_connections = config.database_max_connections,
            "Postgres pool established"
        );

        Ok(Self { pool })
    }

    /// Get a reference to the connection pool
    pub fn get_pool(&self) -> &PgPool {
        &self.pool
    }

    /// Run the embedded migrations
    pub async fn migrate(&self) -> Result<()> {
        sqlx::migrate!()
            .run(self.get_pool())
            .await
            .context("failed to run migrations")?;

        tracing::debug!("migrations applied");
        Ok(())
    }
}

#[async_trait]
impl RecordStore for Database {
    async fn create_client(&self, client: NewClient) -> Result<Client> {
        let client = sqlx::query_as::<_, Client>(
            r#"
            INSERT INTO clients (id, name, email, phone)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, email, phone
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&client.name)
        .bind(&client.email)
        .bind(&client.phone)
        .fetch_one(self.get_pool())
        .await?;

        Ok(client)
    }

    async fn list_clients(&self) -> Result<Vec<Client>> {
        let clients = sqlx::query_as::<_, Client>("SELECT id, name, email, phone FROM clients")
            .fetch_all(self.get_pool())
            .await?;

        Ok(clients)
    }

    async fn find_client(&self, id: Uuid) -> Result<Option<Client>> {
        let client = sqlx::query_as::<_, Client>(
            "SELECT id, name, email, phone FROM clients WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(self.get_pool())
        .await?;

        Ok(client)
    }

    async fn delete_client(&self, id: Uuid) -> Result<Option<Client>> {
        // Projects referencing this client are left alone.
        let client = sqlx::query_as::<_, Client>(
            "DELETE FROM clients WHERE id = $1 RETURNING id, name, email, phone",
        )
        .bind(id)
        .fetch_optional(self.get_pool())
        .await?;

        Ok(client)
    }

    async fn create_project(&self, project: NewProject) -> Result<Project> {
        let row = sqlx::query_as::<_, ProjectRow>(&format!(
            r#"
            INSERT INTO projects (id, name, description, status, client_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {PROJECT_COLUMNS}
            "#
        ))
        .bind(Uuid::new_v4())
        .bind(&project.name)
        .bind(&project.description)
        .bind(project.status.as_str())
        .bind(project.client_id)
        .fetch_one(self.get_pool())
        .await?;

        row.try_into()
    }

    async fn list_projects(&self) -> Result<Vec<Project>> {
        let rows = sqlx::query_as::<_, ProjectRow>(&format!(
            "SELECT {PROJECT_COLUMNS} FROM projects"
        ))
        .fetch_all(self.get_pool())
        .await?;

        rows.into_iter().map(Project::try_from).collect()
    }

    async fn find_project(&self, id: Uuid) -> Result<Option<Project>> {
        let row = sqlx::query_as::<_, ProjectRow>(&format!(
            "SELECT {PROJECT_COLUMNS} FROM projects WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(self.get_pool())
        .await?;

        row.map(Project::try_from).transpose()
    }

    async fn update_project(&self, id: Uuid, patch: ProjectPatch) -> Result<Option<Project>> {
        if patch.is_empty() {
            return self.find_project(id).await;
        }

        // NULL parameters keep the stored column.
        let row = sqlx::query_as::<_, ProjectRow>(&format!(
            r#"
            UPDATE projects
            SET name = COALESCE($2, name),
                description = COALESCE($3, description),
                status = COALESCE($4, status)
            WHERE id = $1
            RETURNING {PROJECT_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(patch.name.as_deref())
        .bind(patch.description.as_deref())
        .bind(patch.status.map(|s| s.as_str()))
        .fetch_optional(self.get_pool())
        .await?;

        row.map(Project::try_from).transpose()
    }

    async fn delete_project(&self, id: Uuid) -> Result<Option<Project>> {
        let row = sqlx::query_as::<_, ProjectRow>(&format!(
            "DELETE FROM projects WHERE id = $1 RETURNING {PROJECT_COLUMNS}"
        ))
        .bind(id)
        .fetch_optional(self.get_pool())
        .await?;

        row.map(Project::try_from).transpose()
    }

    async fn health_check(&self) -> Result<()> {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(self.get_pool())
            .await?;

        Ok(())
    }
}
