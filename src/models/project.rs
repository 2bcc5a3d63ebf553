use std::fmt;
use std::str::FromStr;

use async_graphql::Enum;
use uuid::Uuid;

use crate::error::ValidationError;

/// Lifecycle state of a project.
///
/// The GraphQL member names (`new`, `progress`, `completed`) are what callers
/// send; the literals returned by [`ProjectStatus::as_str`] are what gets
/// persisted and what the `Project.status` field reports.
#[derive(Enum, Copy, Clone, Debug, Default, PartialEq, Eq)]
#[graphql(name = "ProjectStatus")]
pub enum ProjectStatus {
    #[default]
    #[graphql(name = "new")]
    NotStarted,
    #[graphql(name = "progress")]
    InProgress,
    #[graphql(name = "completed")]
    Completed,
}

impl ProjectStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::NotStarted => "Not Started",
            ProjectStatus::InProgress => "In Progress",
            ProjectStatus::Completed => "Completed",
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProjectStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Not Started" => Ok(ProjectStatus::NotStarted),
            "In Progress" => Ok(ProjectStatus::InProgress),
            "Completed" => Ok(ProjectStatus::Completed),
            other => Err(ValidationError::UnknownStatus(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub status: ProjectStatus,
    pub client_id: Uuid,
}

/// Fields supplied by `addProject`.
#[derive(Debug, Clone)]
pub struct NewProject {
    pub name: String,
    pub description: String,
    pub status: ProjectStatus,
    pub client_id: Uuid,
}

impl NewProject {
    pub fn into_project(self, id: Uuid) -> Project {
        Project {
            id,
            name: self.name,
            description: self.description,
            status: self.status,
            client_id: self.client_id,
        }
    }
}

/// Partial overwrite applied by `updateProject`. `None` keeps the stored value.
///
/// Carries no `client_id`; a project keeps the client it was created with.
#[derive(Debug, Clone, Default)]
pub struct ProjectPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub status: Option<ProjectStatus>,
}

impl ProjectPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none() && self.status.is_none()
    }

    pub fn apply_to(self, project: &mut Project) {
        if let Some(name) = self.name {
            project.name = name;
        }
        if let Some(description) = self.description {
            project.description = description;
        }
        if let Some(status) = self.status {
            project.status = status;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Project {
        NewProject {
            name: "Site".to_string(),
            description: "redo".to_string(),
            status: ProjectStatus::default(),
            client_id: Uuid::new_v4(),
        }
        .into_project(Uuid::new_v4())
    }

    #[test]
    fn status_literals_are_persisted_verbatim() {
        assert_eq!(ProjectStatus::NotStarted.as_str(), "Not Started");
        assert_eq!(ProjectStatus::InProgress.as_str(), "In Progress");
        assert_eq!(ProjectStatus::Completed.as_str(), "Completed");
        assert_eq!(ProjectStatus::default(), ProjectStatus::NotStarted);
    }

    #[test]
    fn status_parses_only_exact_literals() {
        assert_eq!("In Progress".parse::<ProjectStatus>().unwrap(), ProjectStatus::InProgress);
        assert!("in progress".parse::<ProjectStatus>().is_err());
        assert!("Bogus".parse::<ProjectStatus>().is_err());
    }

    #[test]
    fn patch_only_touches_supplied_fields() {
        let mut project = sample();
        let before = project.clone();

        ProjectPatch {
            name: Some("X".to_string()),
            ..Default::default()
        }
        .apply_to(&mut project);

        assert_eq!(project.name, "X");
        assert_eq!(project.description, before.description);
        assert_eq!(project.status, before.status);
        assert_eq!(project.client_id, before.client_id);
    }

    #[test]
    fn empty_patch_is_detected() {
        assert!(ProjectPatch::default().is_empty());
        assert!(!ProjectPatch {
            status: Some(ProjectStatus::Completed),
            ..Default::default()
        }
        .is_empty());
    }
}
