//! Mock implementations of port traits

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::domain::entities::{DiscordEngagement, Project, ProjectId};
use crate::domain::ports::{DiscordRepository, Notifier, ProjectRepository};
use crate::error::{DomainError, NotifyError};

fn injected_failure() -> DomainError {
    DomainError::Database("injected failure".to_string())
}

// ============================================================================
// In-Memory Project Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryProjectRepository {
    projects: Arc<RwLock<HashMap<ProjectId, Project>>>,
    fail: bool,
}

impl InMemoryProjectRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_project(self, project: Project) -> Self {
        {
            let mut projects = self.projects.write().unwrap();
            projects.insert(project.id, project);
        }
        self
    }

    /// Every call returns a database error
    pub fn failing(mut self) -> Self {
        self.fail = true;
        self
    }
}

#[async_trait]
impl ProjectRepository for InMemoryProjectRepository {
    async fn find_by_id(&self, id: &ProjectId) -> Result<Option<Project>, DomainError> {
        if self.fail {
            return Err(injected_failure());
        }
        let projects = self.projects.read().unwrap();
        Ok(projects.get(id).cloned())
    }

    async fn update_level(&self, id: &ProjectId, from: i32, to: i32) -> Result<(), DomainError> {
        if self.fail {
            return Err(injected_failure());
        }
        let mut projects = self.projects.write().unwrap();
        match projects.get_mut(id) {
            Some(project) if project.level == from => {
                project.level = to;
                Ok(())
            }
            Some(_) => Err(DomainError::Conflict(format!(
                "Project {} is no longer at level {}",
                id, from
            ))),
            None => Err(DomainError::NotFound(format!("Project {} not found", id))),
        }
    }
}

// ============================================================================
// In-Memory Discord Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryDiscordRepository {
    records: Arc<RwLock<HashMap<ProjectId, DiscordEngagement>>>,
    fail: bool,
}

impl InMemoryDiscordRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_record(self, record: DiscordEngagement) -> Self {
        {
            let mut records = self.records.write().unwrap();
            records.insert(record.project_id, record);
        }
        self
    }

    /// Every call returns a database error
    pub fn failing(mut self) -> Self {
        self.fail = true;
        self
    }
}

#[async_trait]
impl DiscordRepository for InMemoryDiscordRepository {
    async fn find_by_project(
        &self,
        project_id: &ProjectId,
    ) -> Result<Option<DiscordEngagement>, DomainError> {
        if self.fail {
            return Err(injected_failure());
        }
        let records = self.records.read().unwrap();
        Ok(records.get(project_id).cloned())
    }

    async fn link_server(
        &self,
        project_id: &ProjectId,
        server_id: Option<&str>,
        invite_link: Option<&str>,
    ) -> Result<DiscordEngagement, DomainError> {
        if self.fail {
            return Err(injected_failure());
        }
        let mut records = self.records.write().unwrap();
        let record = records
            .entry(*project_id)
            .or_insert_with(|| DiscordEngagement::empty(*project_id));
        if let Some(server_id) = server_id {
            record.server_id = Some(server_id.to_string());
        }
        if let Some(invite_link) = invite_link {
            record.invite_link = Some(invite_link.to_string());
        }
        record.updated_at = Utc::now();
        Ok(record.clone())
    }
}

// ============================================================================
// Recording Notifier
// ============================================================================

/// A notice as seen by the recording notifier
#[derive(Debug, Clone, PartialEq)]
pub enum NoticeKind {
    LevelUp { email: String, level: i32 },
    TerminalTier { project_id: ProjectId },
}

/// Notifier that records successful sends
#[derive(Default)]
pub struct RecordingNotifier {
    sent: Arc<RwLock<Vec<NoticeKind>>>,
    fail_level_up: bool,
    fail_terminal: bool,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Level-up notices fail and are not recorded
    pub fn failing_level_up(mut self) -> Self {
        self.fail_level_up = true;
        self
    }

    /// Terminal-tier notices fail and are not recorded
    pub fn failing_terminal(mut self) -> Self {
        self.fail_terminal = true;
        self
    }

    pub fn sent(&self) -> Vec<NoticeKind> {
        self.sent.read().unwrap().clone()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn send_level_up(&self, email: &str, level: i32) -> Result<(), NotifyError> {
        if self.fail_level_up {
            return Err(NotifyError::RateLimited);
        }
        self.sent.write().unwrap().push(NoticeKind::LevelUp {
            email: email.to_string(),
            level,
        });
        Ok(())
    }

    async fn send_terminal_tier(&self, project_id: &ProjectId) -> Result<(), NotifyError> {
        if self.fail_terminal {
            return Err(NotifyError::Api {
                status: 503,
                message: "unavailable".to_string(),
            });
        }
        self.sent.write().unwrap().push(NoticeKind::TerminalTier {
            project_id: *project_id,
        });
        Ok(())
    }
}
