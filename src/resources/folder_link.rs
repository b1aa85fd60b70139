//! One (source, site) pair and its reconciliation.
use anyhow::{Context as _, Result};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::{LinkOutcome, LinkState};

/// A folder link to reconcile: a Windows source directory and the site in
/// the repository where a symlink to it is expected.
#[derive(Debug, Clone)]
pub struct FolderLink {
    /// The real external directory the link points at.
    pub source: PathBuf,
    /// The path inside the repository where the link lives.
    pub site: PathBuf,
}

impl FolderLink {
    /// Create a new folder link.
    #[must_use]
    pub const fn new(source: PathBuf, site: PathBuf) -> Self {
        Self { source, site }
    }

    /// Human-readable description of this link.
    #[must_use]
    pub fn description(&self) -> String {
        format!("{} -> {}", self.site.display(), self.source.display())
    }

    /// Probe the current state of the site without touching anything.
    ///
    /// The stored link target is compared literally against the source path;
    /// nothing is canonicalised, so a link reaching the same directory
    /// through a different path counts as a different target.
    ///
    /// # Errors
    ///
    /// Returns an error only when the site cannot be inspected at all (e.g.
    /// an unreadable parent directory); every ordinary disposition of the
    /// site is a [`LinkState`].
    pub fn current_state(&self) -> Result<LinkState> {
        if !self.source.is_dir() {
            return Ok(LinkState::MissingSource);
        }

        let meta = match fs::symlink_metadata(&self.site) {
            Ok(meta) => meta,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(LinkState::Absent),
            Err(e) => {
                return Err(e).with_context(|| format!("inspect {}", self.site.display()));
            }
        };

        if !meta.is_symlink() {
            return Ok(LinkState::Occupied {
                kind: object_kind(&meta).to_string(),
            });
        }

        let actual = fs::read_link(&self.site)
            .with_context(|| format!("read link target of {}", self.site.display()))?;
        if actual == self.source {
            Ok(LinkState::Correct)
        } else {
            Ok(LinkState::WrongTarget { actual })
        }
    }

    /// Bring the site into the desired state with at most one mutation.
    ///
    /// Probe-then-act, no retries, no locking: the only mutation is the
    /// symlink creation in the absent branch. A concurrent external creation
    /// between probe and act surfaces as [`LinkOutcome::Failed`], never as
    /// corruption. Calling this twice with unchanged inputs yields
    /// [`LinkOutcome::Created`] then [`LinkOutcome::AlreadyCorrect`].
    ///
    /// Low-level errors never escape this call; they are converted into
    /// [`LinkOutcome::Failed`] so the caller can continue with the
    /// remaining folders.
    #[must_use]
    pub fn reconcile(&self) -> LinkOutcome {
        let state = match self.current_state() {
            Ok(state) => state,
            Err(e) => return LinkOutcome::Failed(format!("{e:#}")),
        };

        match state {
            LinkState::MissingSource => LinkOutcome::SkippedMissingSource,
            LinkState::Correct => LinkOutcome::AlreadyCorrect,
            LinkState::WrongTarget { .. } => LinkOutcome::SkippedWrongTarget,
            LinkState::Occupied { .. } => LinkOutcome::SkippedConflict,
            LinkState::Absent => match create_symlink(&self.source, &self.site) {
                Ok(()) => LinkOutcome::Created,
                Err(e) => LinkOutcome::Failed(e.to_string()),
            },
        }
    }

    /// Whether the site is a symlink storing exactly this link's source.
    ///
    /// Unlike [`current_state`](Self::current_state) this does not require
    /// the source to still exist, so links whose Windows folder has since
    /// been deleted are still recognised as ours.
    #[must_use]
    pub fn is_linked(&self) -> bool {
        fs::read_link(&self.site).is_ok_and(|actual| actual == self.source)
    }

    /// Remove the site, but only when it is a symlink whose literal target
    /// equals this link's source. Returns `true` when something was removed.
    ///
    /// # Errors
    ///
    /// Returns an error when the matching symlink cannot be removed.
    pub fn unlink(&self) -> Result<bool> {
        if self.is_linked() {
            remove_symlink(&self.site).with_context(|| format!("remove {}", self.site.display()))?;
            Ok(true)
        } else {
            Ok(false)
        }
    }
}

/// What kind of non-symlink object occupies a site.
fn object_kind(meta: &fs::Metadata) -> &'static str {
    if meta.is_dir() {
        "directory"
    } else if meta.is_file() {
        "regular file"
    } else {
        "special file"
    }
}

/// Create a symlink at `site` pointing to `source`.
fn create_symlink(source: &Path, site: &Path) -> io::Result<()> {
    #[cfg(unix)]
    {
        std::os::unix::fs::symlink(source, site)?;
    }

    #[cfg(windows)]
    {
        // Sources are always directories here.
        std::os::windows::fs::symlink_dir(source, site)?;
    }

    Ok(())
}

/// Remove a symlink.
///
/// On Windows, directory symlinks must be removed with `remove_dir`;
/// everywhere else `remove_file` removes the link object itself.
fn remove_symlink(path: &Path) -> io::Result<()> {
    #[cfg(windows)]
    {
        if fs::remove_dir(path).is_ok() {
            return Ok(());
        }
    }
    fs::remove_file(path)
}
