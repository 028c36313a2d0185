//! PostgreSQL adapters
//!
//! Implementations of repository traits using SeaORM and PostgreSQL.

pub mod discord_repo;
pub mod project_repo;


pub use discord_repo::PostgresDiscordRepository;
pub use project_repo::PostgresProjectRepository;
