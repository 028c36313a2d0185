//! Level progression thresholds
//!
//! Discord activity a project needs before it is promoted.

/// Members needed to leave the Discord level (bot must be installed too)
pub const DISCORD_LEVEL_MIN_MEMBERS: i32 = 4;

/// Members needed to reach the sandbox
pub const COMMUNITY_LEVEL_MIN_MEMBERS: i32 = 5;

/// Papers shared in the server needed to reach the sandbox
pub const COMMUNITY_LEVEL_MIN_PAPERS: i32 = 5;

/// Messages sent in the server needed to reach the sandbox
pub const COMMUNITY_LEVEL_MIN_MESSAGES: i32 = 50;
