//! CLI command handlers.

pub mod clean;
pub mod completions;
pub mod watch;
