//! Core logging types: report entries and their statuses.

/// One folder's outcome, recorded for the end-of-run summary.
#[derive(Debug, Clone)]
pub struct ReportEntry {
    /// Folder label (name, or `name as alias`).
    pub name: String,
    /// Final status of the entry.
    pub status: EntryStatus,
    /// Optional detail message (e.g., skip reason or error description).
    pub message: Option<String>,
}

/// Status of a reported entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryStatus {
    /// The filesystem was changed (a link created or removed).
    Changed,
    /// Already in the desired state; nothing done.
    Unchanged,
    /// Skipped with a reason (missing source, conflicting object, …).
    Skipped,
    /// Dry-run mode; the change was only previewed.
    DryRun,
    /// The operation for this entry failed.
    Failed,
}
