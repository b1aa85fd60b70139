//! The `link` subcommand: create missing folder links in the repository.
use anyhow::Result;
use std::path::Path;
use std::sync::Arc;

use crate::cli::{GlobalOpts, LinkOpts};
use crate::config::Config;
use crate::error::LinkError;
use crate::logging::Logger;
use crate::platform::Platform;
use crate::tasks::links::LinkFolders;
use crate::tasks::{self, Context};

/// Run the link command.
///
/// # Errors
///
/// Returns an error if configuration cannot be assembled, if the repository
/// root cannot be created, or if any folder failed to link.
pub fn run(global: &GlobalOpts, opts: &LinkOpts, log: &Arc<Logger>) -> Result<()> {
    let platform = Platform::detect();
    let config = Config::from_args(global)?;

    let version = option_env!("WINLINK_VERSION").unwrap_or(env!("CARGO_PKG_VERSION"));
    log.info(&format!("winlink {version}"));
    log.info(&format!("user: {}", config.base.user()));
    log.info(&format!("root: {}", config.root.display()));

    if platform.is_linux() && !platform.is_wsl {
        log.warn("not running under WSL; Windows folders are unlikely to be mounted");
    }
    if !config.base.dir().is_dir() {
        // Environmental, not fatal: every folder will report source missing.
        log.warn(&format!(
            "Windows profile directory '{}' not found",
            config.base.dir().display()
        ));
    }

    ensure_root(&config.root)?;

    let ctx = Context::new(config, platform, Arc::clone(log), global.dry_run);
    let task = LinkFolders::new(opts.skip.clone(), opts.only.clone());
    tasks::execute(&task, &ctx);

    ctx.log.print_summary();

    if ctx.log.has_failures() {
        anyhow::bail!("one or more folders failed to link");
    }
    Ok(())
}

/// Create the repository root directory if absent.
///
/// # Errors
///
/// Returns [`LinkError::RootUnavailable`] when the directory cannot be
/// created (or the path exists but is not a directory). This is fatal and is
/// surfaced before any reconciliation is attempted.
pub fn ensure_root(root: &Path) -> Result<(), LinkError> {
    if root.is_dir() {
        return Ok(());
    }
    std::fs::create_dir_all(root).map_err(|source| LinkError::RootUnavailable {
        path: root.display().to_string(),
        source,
    })
}
