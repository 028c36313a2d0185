//! Domain entities
//!
//! Pure domain models. These are separate from the SeaORM entities in the
//! `entity` module.

pub mod discord;
pub mod level;
pub mod project;

pub use discord::{DiscordEngagement, DiscordReference, InstallationStatus};
pub use level::{
    next_level_requirements, LEVEL_COMMUNITY, LEVEL_DISCORD, LEVEL_SANDBOX, MAX_LEVEL, MIN_LEVEL,
};
pub use project::{Project, ProjectId};
