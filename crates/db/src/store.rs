//! Storage seam used by the API handlers.

use async_trait::async_trait;
use folio_core::types::DbId;

use crate::models::project::{CreateProject, Project, UpdateProject};
use crate::repositories::ProjectRepo;
use crate::DbPool;

/// Create/read/update/delete primitives over project rows, keyed by id.
///
/// No operation spans more than one row and nothing is locked; concurrent
/// updates to the same id resolve as last write wins.
#[async_trait]
pub trait ProjectStore: Send + Sync {
    async fn list(&self) -> Result<Vec<Project>, sqlx::Error>;

    async fn find_by_id(&self, id: DbId) -> Result<Option<Project>, sqlx::Error>;

    async fn create(&self, input: &CreateProject) -> Result<Project, sqlx::Error>;

    /// `None` if no row with `id` exists.
    async fn update(&self, id: DbId, input: &UpdateProject)
        -> Result<Option<Project>, sqlx::Error>;

    /// `false` if no row with `id` exists.
    async fn delete(&self, id: DbId) -> Result<bool, sqlx::Error>;

    /// Confirm the backing storage is reachable.
    async fn ping(&self) -> Result<(), sqlx::Error>;
}

#[async_trait]
impl ProjectStore for DbPool {
    async fn list(&self) -> Result<Vec<Project>, sqlx::Error> {
        ProjectRepo::list(self).await
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Project>, sqlx::Error> {
        ProjectRepo::find_by_id(self, id).await
    }

    async fn create(&self, input: &CreateProject) -> Result<Project, sqlx::Error> {
        ProjectRepo::create(self, input).await
    }

    async fn update(
        &self,
        id: DbId,
        input: &UpdateProject,
    ) -> Result<Option<Project>, sqlx::Error> {
        ProjectRepo::update(self, id, input).await
    }

    async fn delete(&self, id: DbId) -> Result<bool, sqlx::Error> {
        ProjectRepo::delete(self, id).await
    }

    async fn ping(&self) -> Result<(), sqlx::Error> {
        crate::health_check(self).await
    }
}
