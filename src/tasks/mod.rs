//! Named, sequentially-executed units of work.
//!
//! Reconciliations are performed strictly one at a time: the filesystem is
//! the only shared resource, and the probe-then-act sequence in the
//! reconciler tolerates no in-process concurrency.
mod context;
pub mod links;

pub use context::Context;

use anyhow::Result;

use crate::logging::EntryStatus;

/// Result of running a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskResult {
    /// The task completed; per-entry outcomes were recorded on the logger.
    Ok,
    /// The task did not apply and was skipped entirely.
    Skipped(String),
    /// The task ran in dry-run mode; no changes were applied.
    DryRun,
}

/// A named, executable task.
pub trait Task {
    /// Human-readable task name.
    fn name(&self) -> &str;

    /// Whether this task has anything to do for the current configuration.
    fn should_run(&self, ctx: &Context) -> bool;

    /// Execute the task.
    ///
    /// Per-folder problems are recorded as entries on the logger, never
    /// returned as errors; an `Err` from this method means the task as a
    /// whole could not run.
    ///
    /// # Errors
    ///
    /// Returns an error if the task fails outright, such as when the
    /// repository root cannot be read at all.
    fn run(&self, ctx: &Context) -> Result<TaskResult>;
}

/// Execute a task, recording a failure entry if it errors outright.
pub fn execute(task: &dyn Task, ctx: &Context) {
    if !task.should_run(ctx) {
        ctx.log
            .debug(&format!("skipping task: {} (not applicable)", task.name()));
        return;
    }

    ctx.log.stage(task.name());

    match task.run(ctx) {
        Ok(TaskResult::Ok | TaskResult::DryRun) => {}
        Ok(TaskResult::Skipped(reason)) => {
            ctx.log.info(&format!("skipped: {reason}"));
        }
        Err(e) => {
            ctx.log.error(&format!("{}: {e:#}", task.name()));
            ctx.log
                .record(task.name(), EntryStatus::Failed, Some(&format!("{e:#}")));
        }
    }
}

/// Shared helpers for task unit tests.
#[cfg(test)]
pub mod test_helpers {
    use std::path::PathBuf;
    use std::sync::Arc;

    use crate::config::{Config, FolderSpec, WindowsBase};
    use crate::logging::Logger;
    use crate::platform::{Os, Platform};

    use super::Context;

    /// Build a [`Context`] rooted at `root`, with sources under
    /// `<users_dir>/test/`, a WSL platform, and a fresh logger.
    #[must_use]
    pub fn make_context(root: PathBuf, users_dir: PathBuf, folders: Vec<FolderSpec>) -> Context {
        let config = Config {
            root,
            base: WindowsBase::new(users_dir, "test".to_string()),
            folders,
        };
        Context::new(
            config,
            Platform::new(Os::Linux, true),
            Arc::new(Logger::new("test")),
            false,
        )
    }

    /// Like [`make_context`], but also returns the logger so tests can
    /// inspect recorded entries.
    #[must_use]
    pub fn make_context_with_log(
        root: PathBuf,
        users_dir: PathBuf,
        folders: Vec<FolderSpec>,
    ) -> (Context, Arc<Logger>) {
        let mut ctx = make_context(root, users_dir, folders);
        let log = Arc::new(Logger::new("test"));
        ctx.log = Arc::clone(&log);
        (ctx, log)
    }
}
