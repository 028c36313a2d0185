//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod discord;
pub mod levels;
pub mod projects;

pub use discord::{check_installation, extract_reference, installation_url, link_server};
pub use levels::{check_snapshot, get_requirements};
pub use projects::{check_level, get_project};
