//! Application layer
//!
//! Use cases on top of the domain: level progression and the Discord
//! integration.

pub mod discord_parser;
pub mod discord_service;
pub mod level_config;
pub mod level_service;

pub use discord_parser::extract_discord_info;
pub use discord_service::{DiscordBotConfig, DiscordService};
// Re-export thresholds for consumers of the level rules
#[allow(unused_imports)]
pub use level_config::*;
#[allow(unused_imports)]
pub use level_service::{promotion_target, LevelCheck, LevelService, LevelThresholds, PendingNotices};
