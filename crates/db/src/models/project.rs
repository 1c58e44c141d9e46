//! Project entity model and DTOs.

use folio_core::projects::ProjectRecord;
use folio_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

pub use folio_core::projects::{CreateProject, UpdateProject};

/// A project row from the `projects` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub image_url: Option<String>,
    pub project_url: Option<String>,
    pub github_url: Option<String>,
    pub technologies: Vec<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<Project> for ProjectRecord {
    fn from(row: Project) -> Self {
        ProjectRecord {
            id: Some(row.id),
            title: row.title,
            description: row.description,
            image_url: row.image_url,
            project_url: row.project_url,
            github_url: row.github_url,
            technologies: row.technologies,
            created_at: Some(row.created_at),
            updated_at: Some(row.updated_at),
        }
    }
}
