//! Top-level subcommand orchestration.
pub mod link;
pub mod status;
pub mod unlink;
