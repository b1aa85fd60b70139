//! Folder-link reconciliation tasks.
use anyhow::Result;

use super::{Context, Task, TaskResult};
use crate::logging::EntryStatus;
use crate::resources::{LinkOutcome, LinkState};

/// Reconcile every configured folder: create missing links, leave correct
/// ones alone, and report everything else without touching it.
#[derive(Debug)]
pub struct LinkFolders {
    /// Skip folders whose name contains any of these values.
    skip: Vec<String>,
    /// When non-empty, only process folders whose name contains one of these.
    only: Vec<String>,
}

impl LinkFolders {
    /// Create the task with `--skip`/`--only` name filters.
    #[must_use]
    pub const fn new(skip: Vec<String>, only: Vec<String>) -> Self {
        Self { skip, only }
    }

    /// Case-insensitive substring filter, `--only` taking precedence.
    fn retained(&self, name: &str) -> bool {
        let name = name.to_lowercase();
        if !self.only.is_empty() {
            return self.only.iter().any(|o| name.contains(&o.to_lowercase()));
        }
        if !self.skip.is_empty() {
            return !self.skip.iter().any(|s| name.contains(&s.to_lowercase()));
        }
        true
    }
}

impl Task for LinkFolders {
    fn name(&self) -> &str {
        "Link Windows folders"
    }

    fn should_run(&self, ctx: &Context) -> bool {
        !ctx.config.folders.is_empty()
    }

    fn run(&self, ctx: &Context) -> Result<TaskResult> {
        let mut linked = 0u32;
        let mut already = 0u32;
        let mut skipped = 0u32;
        let mut failed = 0u32;

        for spec in &ctx.config.folders {
            if !self.retained(&spec.name) {
                ctx.log.debug(&format!("filtered out: {}", spec.name));
                continue;
            }

            let link = ctx.link_for(spec);
            let label = spec.label();

            if ctx.dry_run {
                match link.current_state() {
                    Ok(LinkState::Absent) => {
                        ctx.log.dry_run(&format!("would link {}", link.description()));
                        ctx.log.record(&label, EntryStatus::DryRun, None);
                        linked += 1;
                    }
                    Ok(LinkState::Correct) => {
                        ctx.log
                            .debug(&format!("already linked: {}", link.site.display()));
                        ctx.log.record(&label, EntryStatus::Unchanged, None);
                        already += 1;
                    }
                    Ok(LinkState::MissingSource) => {
                        ctx.log.warn(&format!(
                            "Windows folder '{}' not found or not a directory, skipping",
                            link.source.display()
                        ));
                        ctx.log
                            .record(&label, EntryStatus::Skipped, Some("source missing"));
                        skipped += 1;
                    }
                    Ok(LinkState::WrongTarget { actual }) => {
                        ctx.log.warn(&format!(
                            "link at '{}' points to '{}', skipping",
                            link.site.display(),
                            actual.display()
                        ));
                        ctx.log.record(
                            &label,
                            EntryStatus::Skipped,
                            Some(&format!("points to {}", actual.display())),
                        );
                        skipped += 1;
                    }
                    Ok(LinkState::Occupied { kind }) => {
                        ctx.log.warn(&format!(
                            "a {kind} already exists at '{}', skipping",
                            link.site.display()
                        ));
                        ctx.log.record(
                            &label,
                            EntryStatus::Skipped,
                            Some(&format!("{kind} at site")),
                        );
                        skipped += 1;
                    }
                    Err(e) => {
                        ctx.log.error(&format!("{}: {e:#}", link.site.display()));
                        ctx.log
                            .record(&label, EntryStatus::Failed, Some(&format!("{e:#}")));
                        failed += 1;
                    }
                }
                continue;
            }

            match link.reconcile() {
                LinkOutcome::Created => {
                    ctx.log.debug(&format!("linked {}", link.description()));
                    ctx.log.record(&label, EntryStatus::Changed, None);
                    linked += 1;
                }
                LinkOutcome::AlreadyCorrect => {
                    ctx.log
                        .debug(&format!("already linked: {}", link.site.display()));
                    ctx.log.record(&label, EntryStatus::Unchanged, None);
                    already += 1;
                }
                LinkOutcome::SkippedMissingSource => {
                    ctx.log.warn(&format!(
                        "Windows folder '{}' not found or not a directory, skipping",
                        link.source.display()
                    ));
                    ctx.log
                        .record(&label, EntryStatus::Skipped, Some("source missing"));
                    skipped += 1;
                }
                LinkOutcome::SkippedWrongTarget => {
                    ctx.log.warn(&format!(
                        "existing link at '{}' points elsewhere, skipping",
                        link.site.display()
                    ));
                    ctx.log.record(
                        &label,
                        EntryStatus::Skipped,
                        Some("existing link points elsewhere"),
                    );
                    skipped += 1;
                }
                LinkOutcome::SkippedConflict => {
                    ctx.log.warn(&format!(
                        "'{}' already exists and is not a link, skipping",
                        link.site.display()
                    ));
                    ctx.log.record(
                        &label,
                        EntryStatus::Skipped,
                        Some("site occupied by another object"),
                    );
                    skipped += 1;
                }
                LinkOutcome::Failed(reason) => {
                    ctx.log
                        .error(&format!("link {} failed: {reason}", link.description()));
                    ctx.log.record(&label, EntryStatus::Failed, Some(&reason));
                    failed += 1;
                }
            }
        }

        if ctx.dry_run {
            ctx.log.info(&format!(
                "{linked} would link, {already} already linked, {skipped} skipped, {failed} failed"
            ));
            return Ok(TaskResult::DryRun);
        }

        ctx.log.info(&format!(
            "{linked} linked, {already} already linked, {skipped} skipped, {failed} failed"
        ));
        Ok(TaskResult::Ok)
    }
}

/// Remove links previously created by [`LinkFolders`].
///
/// A site is removed only when it is a symlink storing exactly the computed
/// source path; foreign links and real files are left untouched.
#[derive(Debug)]
pub struct UnlinkFolders;

impl Task for UnlinkFolders {
    fn name(&self) -> &str {
        "Remove folder links"
    }

    fn should_run(&self, ctx: &Context) -> bool {
        !ctx.config.folders.is_empty()
    }

    fn run(&self, ctx: &Context) -> Result<TaskResult> {
        let mut removed = 0u32;
        let mut kept = 0u32;
        let mut failed = 0u32;

        for spec in &ctx.config.folders {
            let link = ctx.link_for(spec);
            let label = spec.label();

            if ctx.dry_run {
                if link.is_linked() {
                    ctx.log
                        .dry_run(&format!("would remove {}", link.site.display()));
                    ctx.log.record(&label, EntryStatus::DryRun, None);
                    removed += 1;
                } else {
                    ctx.log.debug(&format!("not linked: {}", link.site.display()));
                    ctx.log
                        .record(&label, EntryStatus::Unchanged, Some("not linked"));
                    kept += 1;
                }
                continue;
            }

            match link.unlink() {
                Ok(true) => {
                    ctx.log.debug(&format!("removed: {}", link.site.display()));
                    ctx.log.record(&label, EntryStatus::Changed, Some("removed"));
                    removed += 1;
                }
                Ok(false) => {
                    ctx.log.debug(&format!("not linked: {}", link.site.display()));
                    ctx.log
                        .record(&label, EntryStatus::Unchanged, Some("not linked"));
                    kept += 1;
                }
                Err(e) => {
                    ctx.log
                        .error(&format!("remove {} failed: {e:#}", link.site.display()));
                    ctx.log
                        .record(&label, EntryStatus::Failed, Some(&format!("{e:#}")));
                    failed += 1;
                }
            }
        }

        if ctx.dry_run {
            ctx.log
                .info(&format!("{removed} would remove, {kept} not linked"));
            return Ok(TaskResult::DryRun);
        }

        ctx.log.info(&format!(
            "{removed} removed, {kept} not linked, {failed} failed"
        ));
        Ok(TaskResult::Ok)
    }
}
