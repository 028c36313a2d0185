//! Domain layer
//!
//! Projects, their Discord presence and the level table. No I/O here.
//! - `entities`: project, Discord and level models
//! - `ports`: storage and notification traits implemented by adapters

pub mod entities;
pub mod ports;
