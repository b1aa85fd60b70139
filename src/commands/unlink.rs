//! The `unlink` subcommand: remove links previously created by `link`.
use anyhow::Result;
use std::sync::Arc;

use crate::cli::{GlobalOpts, UnlinkOpts};
use crate::config::Config;
use crate::logging::Logger;
use crate::platform::Platform;
use crate::tasks::links::UnlinkFolders;
use crate::tasks::{self, Context};

/// Run the unlink command.
///
/// # Errors
///
/// Returns an error if configuration cannot be assembled or if any link
/// could not be removed.
pub fn run(global: &GlobalOpts, _opts: &UnlinkOpts, log: &Arc<Logger>) -> Result<()> {
    let platform = Platform::detect();
    let config = Config::from_args(global)?;

    log.info(&format!("root: {}", config.root.display()));

    let ctx = Context::new(config, platform, Arc::clone(log), global.dry_run);
    tasks::execute(&UnlinkFolders, &ctx);

    ctx.log.print_summary();

    if ctx.log.has_failures() {
        anyhow::bail!("one or more links failed to remove");
    }
    Ok(())
}
