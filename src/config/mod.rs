//! Run configuration assembled from CLI options and the environment.
pub mod base;
pub mod folders;

use anyhow::Result;
use std::path::PathBuf;

use crate::cli::GlobalOpts;
use crate::error::ConfigError;

pub use base::{DEFAULT_USERS_DIR, WindowsBase};
pub use folders::{FolderSpec, default_folders};

/// Everything a run needs: where links go, where they point, and which
/// folders to process.
#[derive(Debug, Clone)]
pub struct Config {
    /// Repository directory that holds the links.
    pub root: PathBuf,
    /// External base location the links point into.
    pub base: WindowsBase,
    /// Ordered folder list; each entry produces exactly one reported outcome.
    pub folders: Vec<FolderSpec>,
}

impl Config {
    /// Assemble the configuration from CLI options, consulting the
    /// `WINLINK_USER` and `WINLINK_ROOT` environment variables for values
    /// not given on the command line.
    ///
    /// # Errors
    ///
    /// Returns an error when no Windows user can be resolved, when a
    /// `--folder` value is malformed, or when the current directory (the
    /// root of last resort) cannot be determined.
    pub fn from_args(global: &GlobalOpts) -> Result<Self> {
        let user = resolve_user(
            global.user.as_deref(),
            std::env::var("WINLINK_USER").ok(),
        )?;
        let users_dir = global
            .users_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_USERS_DIR));
        let root = match global.root.clone() {
            Some(root) => root,
            None => match std::env::var("WINLINK_ROOT") {
                Ok(root) => PathBuf::from(root),
                Err(_) => std::env::current_dir()?,
            },
        };
        let folders = resolve_folders(&global.folders)?;

        Ok(Self {
            root,
            base: WindowsBase::new(users_dir, user),
            folders,
        })
    }
}

/// Pick the Windows account name from the explicit flag, then the
/// environment.
fn resolve_user(explicit: Option<&str>, env: Option<String>) -> Result<String, ConfigError> {
    explicit
        .map(String::from)
        .or(env)
        .filter(|u| !u.is_empty())
        .ok_or(ConfigError::MissingWindowsUser)
}

/// Parse `--folder` overrides, falling back to the built-in list when none
/// are given.
fn resolve_folders(overrides: &[String]) -> Result<Vec<FolderSpec>, ConfigError> {
    if overrides.is_empty() {
        return Ok(default_folders());
    }
    overrides.iter().map(|s| FolderSpec::parse(s)).collect()
}
