//! Project domain entity
//!
//! A science project moving through the launchpad levels.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::discord::DiscordEngagement;

/// Unique identifier for a project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProjectId(pub Uuid);

impl ProjectId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ProjectId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for ProjectId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for ProjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A project together with its (optional) Discord presence
#[derive(Debug, Clone, Serialize)]
pub struct Project {
    pub id: ProjectId,
    pub name: String,
    /// Current level, 1 through 4
    pub level: i32,
    /// Contact address for level-up notices
    pub email: Option<String>,
    pub discord: Option<DiscordEngagement>,
    pub created_at: DateTime<Utc>,
}

impl Project {
    /// Contact email, ignoring blank values
    pub fn contact_email(&self) -> Option<&str> {
        self.email
            .as_deref()
            .map(str::trim)
            .filter(|email| !email.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(level: i32, email: Option<&str>) -> Project {
        Project {
            id: ProjectId::new(),
            name: "p".to_string(),
            level,
            email: email.map(str::to_string),
            discord: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn blank_email_is_no_contact() {
        assert_eq!(project(2, Some("  ")).contact_email(), None);
        assert_eq!(project(2, None).contact_email(), None);
        assert_eq!(
            project(2, Some("lab@example.org")).contact_email(),
            Some("lab@example.org")
        );
    }
}
