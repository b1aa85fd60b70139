//! Domain-specific error types for the winlink engine.
//!
//! Internal modules return typed errors via [`thiserror`]; command handlers
//! at the CLI boundary convert them to [`anyhow::Error`] with the standard
//! `?` operator. Per-folder reconciliation failures are deliberately NOT
//! errors — they are contained in
//! [`LinkOutcome::Failed`](crate::resources::LinkOutcome::Failed) so that one
//! bad folder never aborts the rest of the run.

use thiserror::Error;

/// Errors that arise while assembling the run configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// No Windows account name was supplied on the command line or via the
    /// `WINLINK_USER` environment variable.
    #[error("Windows user not specified: pass --user or set WINLINK_USER")]
    MissingWindowsUser,

    /// A `--folder` value could not be parsed as `NAME` or `NAME=ALIAS`.
    #[error("Invalid folder spec '{spec}': {reason}")]
    InvalidFolderSpec {
        /// The raw value as given on the command line.
        spec: String,
        /// Human-readable reason the value was rejected.
        reason: String,
    },
}

/// Errors that arise during link-run bootstrap.
#[derive(Error, Debug)]
pub enum LinkError {
    /// The repository root directory could not be created or is not a
    /// directory. Fatal before any reconciliation is attempted.
    #[error("repository root unavailable at {path}: {source}")]
    RootUnavailable {
        /// Path that was supposed to hold the links.
        path: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}
