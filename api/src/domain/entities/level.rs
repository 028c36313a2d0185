//! Project levels
//!
//! Level numbers and the static requirement table shown to project owners.

/// Level every project starts at
pub const MIN_LEVEL: i32 = 1;

/// Level at which the Discord server becomes relevant
pub const LEVEL_DISCORD: i32 = 2;

/// Level reached once the Discord community is up
pub const LEVEL_COMMUNITY: i32 = 3;

/// Terminal gamified level (sandbox); the operations team takes over here
pub const LEVEL_SANDBOX: i32 = 4;

pub const MAX_LEVEL: i32 = LEVEL_SANDBOX;

const LEVEL_1_REQUIREMENTS: &[&str] = &["Mint Idea NFT", "Mint Vision NFT"];
const LEVEL_2_REQUIREMENTS: &[&str] = &["Create Discord Server", "Reach 4+ Members"];
const LEVEL_3_REQUIREMENTS: &[&str] = &[
    "Reach 5+ Members",
    "Share 5+ Scientific Papers",
    "Send 50+ Messages",
];
const LEVEL_4_REQUIREMENTS: &[&str] = &["All requirements met - Bio team will contact you"];
const UNKNOWN_LEVEL: &[&str] = &["Unknown level"];

/// Requirements a project at `current_level` has to meet for the next level
pub fn next_level_requirements(current_level: i32) -> &'static [&'static str] {
    match current_level {
        1 => LEVEL_1_REQUIREMENTS,
        2 => LEVEL_2_REQUIREMENTS,
        3 => LEVEL_3_REQUIREMENTS,
        4 => LEVEL_4_REQUIREMENTS,
        _ => UNKNOWN_LEVEL,
    }
}
