//! Shared context for task execution.
use std::sync::Arc;

use crate::config::{Config, FolderSpec};
use crate::logging::Logger;
use crate::platform::Platform;
use crate::resources::FolderLink;

/// Shared context for task execution.
#[derive(Debug)]
pub struct Context {
    /// Run configuration: root, base, and folder list.
    pub config: Config,
    /// Detected platform information.
    pub platform: Platform,
    /// Logger for output and entry recording.
    pub log: Arc<Logger>,
    /// Whether to perform a dry run (preview changes without applying).
    pub dry_run: bool,
}

impl Context {
    /// Creates a new context for task execution.
    #[must_use]
    pub const fn new(config: Config, platform: Platform, log: Arc<Logger>, dry_run: bool) -> Self {
        Self {
            config,
            platform,
            log,
            dry_run,
        }
    }

    /// The folder link for one folder entry: source under the Windows base,
    /// site under the repository root named after the alias (or the folder
    /// name when no alias is given).
    #[must_use]
    pub fn link_for(&self, spec: &FolderSpec) -> FolderLink {
        FolderLink::new(
            self.config.base.path_for(&spec.name),
            self.config.root.join(spec.site_name()),
        )
    }
}
