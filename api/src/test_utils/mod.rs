//! Test utilities
//!
//! Manual mock implementations and test fixtures for unit testing.
//! The mocks keep state in memory, can be switched into a failing mode to
//! exercise the fail-open paths, and record what was sent.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
