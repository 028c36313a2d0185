//! Notification port trait
//!
//! Outbound notices raised when a project levels up. Delivery is owned by the
//! adapter; callers treat every send as fire-and-forget.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::ProjectId;
use crate::error::NotifyError;

/// Notice payload as delivered to external channels
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Notice {
    /// Sent to the project's contact address
    LevelUp {
        email: String,
        level: i32,
        timestamp: DateTime<Utc>,
    },
    /// Sent to the operations channel when a project reaches the sandbox
    TerminalTier {
        project_id: ProjectId,
        timestamp: DateTime<Utc>,
    },
}

/// Port trait for notice delivery
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Tell a project owner they reached `level`
    async fn send_level_up(&self, email: &str, level: i32) -> Result<(), NotifyError>;

    /// Tell the operations team a project reached the terminal tier
    async fn send_terminal_tier(&self, project_id: &ProjectId) -> Result<(), NotifyError>;
}
