//! In-process record store.
//!
//! Used when no `DATABASE_URL` is configured and by the HTTP-level tests.
//! Ids are assigned from a monotonically increasing counter starting at 1
//! and are never reused after a delete.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use folio_core::patch::Patch;
use folio_core::types::DbId;
use tokio::sync::RwLock;

use crate::models::project::{CreateProject, Project, UpdateProject};
use crate::store::ProjectStore;

#[derive(Debug, Default)]
struct Table {
    last_id: DbId,
    rows: BTreeMap<DbId, Project>,
}

#[derive(Debug, Default)]
pub struct MemoryProjectStore {
    table: RwLock<Table>,
}

impl MemoryProjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored rows.
    pub async fn len(&self) -> usize {
        self.table.read().await.rows.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

fn apply<T: Clone>(target: &mut T, patch: &Patch<T>) {
    if let Patch::Set(value) = patch {
        *target = value.clone();
    }
}

#[async_trait]
impl ProjectStore for MemoryProjectStore {
    async fn list(&self) -> Result<Vec<Project>, sqlx::Error> {
        Ok(self.table.read().await.rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Project>, sqlx::Error> {
        Ok(self.table.read().await.rows.get(&id).cloned())
    }

    async fn create(&self, input: &CreateProject) -> Result<Project, sqlx::Error> {
        let mut table = self.table.write().await;
        table.last_id += 1;
        let now = Utc::now();
        let project = Project {
            id: table.last_id,
            title: input.title.clone(),
            description: input.description.clone(),
            image_url: input.image_url.clone(),
            project_url: input.project_url.clone(),
            github_url: input.github_url.clone(),
            technologies: input.technologies.clone(),
            created_at: now,
            updated_at: now,
        };
        table.rows.insert(project.id, project.clone());
        Ok(project)
    }

    async fn update(
        &self,
        id: DbId,
        input: &UpdateProject,
    ) -> Result<Option<Project>, sqlx::Error> {
        let mut table = self.table.write().await;
        let Some(project) = table.rows.get_mut(&id) else {
            return Ok(None);
        };

        apply(&mut project.title, &input.title);
        apply(&mut project.description, &input.description);
        apply(&mut project.image_url, &input.image_url);
        apply(&mut project.project_url, &input.project_url);
        apply(&mut project.github_url, &input.github_url);
        apply(&mut project.technologies, &input.technologies);
        project.updated_at = Utc::now();

        Ok(Some(project.clone()))
    }

    async fn delete(&self, id: DbId) -> Result<bool, sqlx::Error> {
        Ok(self.table.write().await.rows.remove(&id).is_some())
    }

    async fn ping(&self) -> Result<(), sqlx::Error> {
        Ok(())
    }
}
