//! Repository port traits
//!
//! These traits define the interface for data persistence.
//! Implementations are provided by adapters (e.g., PostgreSQL).

use async_trait::async_trait;

use crate::domain::entities::{DiscordEngagement, Project, ProjectId};
use crate::error::DomainError;

/// Repository for Project entities
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// Find a project by ID, with its Discord record attached when one exists
    async fn find_by_id(&self, id: &ProjectId) -> Result<Option<Project>, DomainError>;

    /// Move a project from `from` to `to`.
    ///
    /// Only succeeds while the stored level still equals `from`; otherwise
    /// returns `DomainError::Conflict`.
    async fn update_level(&self, id: &ProjectId, from: i32, to: i32) -> Result<(), DomainError>;
}

/// Repository for per-project Discord records
#[async_trait]
pub trait DiscordRepository: Send + Sync {
    /// Find the Discord record for a project
    async fn find_by_project(
        &self,
        project_id: &ProjectId,
    ) -> Result<Option<DiscordEngagement>, DomainError>;

    /// Store the server reference for a project, creating the record if needed.
    /// `None` values leave an already stored reference untouched.
    async fn link_server(
        &self,
        project_id: &ProjectId,
        server_id: Option<&str>,
        invite_link: Option<&str>,
    ) -> Result<DiscordEngagement, DomainError>;
}
