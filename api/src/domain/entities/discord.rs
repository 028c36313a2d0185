//! Discord engagement entity
//!
//! One record per project. Counters are written by the ingestion bot,
//! never by this service.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::project::ProjectId;

/// Discord presence and activity counters for a project
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscordEngagement {
    pub project_id: ProjectId,
    pub server_id: Option<String>,
    pub invite_link: Option<String>,
    pub bot_added: bool,
    pub member_count: i32,
    pub papers_shared: i32,
    pub messages_count: i32,
    pub updated_at: DateTime<Utc>,
}

impl DiscordEngagement {
    /// Empty record for a project that has just linked a server
    pub fn empty(project_id: ProjectId) -> Self {
        Self {
            project_id,
            server_id: None,
            invite_link: None,
            bot_added: false,
            member_count: 0,
            papers_shared: 0,
            messages_count: 0,
            updated_at: Utc::now(),
        }
    }
}

/// Server reference pulled out of free-form text
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DiscordReference {
    pub server_id: Option<String>,
    pub invite_link: Option<String>,
    pub invite_code: Option<String>,
}

impl DiscordReference {
    /// True when neither a server id nor an invite was found
    pub fn is_empty(&self) -> bool {
        self.server_id.is_none() && self.invite_link.is_none()
    }
}

/// Bot installation state for a project
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InstallationStatus {
    pub installed: bool,
    pub installation_link: Option<String>,
}
