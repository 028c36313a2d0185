//! Adapters layer
//!
//! Implementations of port traits for external systems.

pub mod notify;
pub mod postgres;

pub use notify::NotifierImpl;
pub use postgres::{PostgresDiscordRepository, PostgresProjectRepository};
