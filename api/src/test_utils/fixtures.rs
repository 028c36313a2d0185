//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use chrono::Utc;
use uuid::Uuid;

use crate::domain::entities::{DiscordEngagement, Project, ProjectId};

/// Create a test project at `level` with a contact email and no Discord record
pub fn test_project_at_level(level: i32) -> Project {
    Project {
        id: ProjectId(Uuid::new_v4()),
        name: format!("level-{}-project", level),
        level,
        email: Some("lab@example.org".to_string()),
        discord: None,
        created_at: Utc::now(),
    }
}

/// Create a test Discord record with the given counters
pub fn test_discord(
    project_id: ProjectId,
    bot_added: bool,
    member_count: i32,
    papers_shared: i32,
    messages_count: i32,
) -> DiscordEngagement {
    DiscordEngagement {
        project_id,
        server_id: Some("123456789012345678".to_string()),
        invite_link: Some("https://discord.gg/test".to_string()),
        bot_added,
        member_count,
        papers_shared,
        messages_count,
        updated_at: Utc::now(),
    }
}

/// Create a test project at `level` with a Discord record attached
pub fn test_project_with_discord(
    level: i32,
    bot_added: bool,
    member_count: i32,
    papers_shared: i32,
    messages_count: i32,
) -> Project {
    let mut project = test_project_at_level(level);
    project.discord = Some(test_discord(
        project.id,
        bot_added,
        member_count,
        papers_shared,
        messages_count,
    ));
    project
}
