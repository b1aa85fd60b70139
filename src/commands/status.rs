//! The `status` subcommand: read-only report of every folder link.
use anyhow::Result;
use serde::Serialize;

use crate::cli::{GlobalOpts, StatusOpts};
use crate::config::Config;
use crate::resources::{FolderLink, LinkState};

/// The observed disposition of one folder entry. Probing is read-only;
/// `status` never mutates the filesystem.
#[derive(Debug, Clone, Serialize)]
pub struct StatusReport {
    /// Windows folder name.
    pub folder: String,
    /// Alias the link is created under, when one is configured.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    /// Path the link points (or would point) at.
    pub source: String,
    /// Path of the link site inside the repository.
    pub site: String,
    /// One of `linked`, `absent`, `no-source`, `wrong-target`, `conflict`,
    /// `error`.
    pub state: String,
    /// Extra detail: the stored target for `wrong-target`, the object kind
    /// for `conflict`, the error text for `error`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

/// Probe every configured folder and return one report per entry.
#[must_use]
pub fn collect(config: &Config) -> Vec<StatusReport> {
    config
        .folders
        .iter()
        .map(|spec| {
            let link = FolderLink::new(
                config.base.path_for(&spec.name),
                config.root.join(spec.site_name()),
            );
            let (state, detail) = match link.current_state() {
                Ok(LinkState::Correct) => ("linked", None),
                Ok(LinkState::Absent) => ("absent", None),
                Ok(LinkState::MissingSource) => ("no-source", None),
                Ok(LinkState::WrongTarget { actual }) => {
                    ("wrong-target", Some(actual.display().to_string()))
                }
                Ok(LinkState::Occupied { kind }) => ("conflict", Some(kind)),
                Err(e) => ("error", Some(format!("{e:#}"))),
            };
            StatusReport {
                folder: spec.name.clone(),
                alias: spec.alias.clone(),
                source: link.source.display().to_string(),
                site: link.site.display().to_string(),
                state: state.to_string(),
                detail,
            }
        })
        .collect()
}

/// Run the status command.
///
/// # Errors
///
/// Returns an error if configuration cannot be assembled or the JSON report
/// cannot be serialised.
#[allow(clippy::print_stdout)]
pub fn run(global: &GlobalOpts, opts: &StatusOpts) -> Result<()> {
    let config = Config::from_args(global)?;
    let reports = collect(&config);

    if opts.json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
        return Ok(());
    }

    let width = reports.iter().map(|r| r.folder.len()).max().unwrap_or(0);
    for r in &reports {
        let detail = r
            .detail
            .as_ref()
            .map_or_else(String::new, |d| format!(" ({d})"));
        println!("{:<width$}  {:<12}  {}{detail}", r.folder, r.state, r.site);
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::config::{FolderSpec, WindowsBase};
    use std::fs;

    fn config_in(base: &std::path::Path, root: &std::path::Path, names: &[&str]) -> Config {
        Config {
            root: root.to_path_buf(),
            base: WindowsBase::at(base, "test"),
            folders: names.iter().map(|n| FolderSpec::named(n)).collect(),
        }
    }

    #[test]
    fn collect_reports_every_folder_once() {
        let base = tempfile::tempdir().unwrap();
        let repo = tempfile::tempdir().unwrap();
        fs::create_dir_all(base.path().join("test").join("Desktop")).unwrap();

        let config = config_in(base.path(), repo.path(), &["Desktop", "Music"]);
        let reports = collect(&config);

        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].state, "absent");
        assert_eq!(reports[1].state, "no-source");
    }

    #[cfg(unix)]
    #[test]
    fn collect_reports_linked_and_wrong_target() {
        let base = tempfile::tempdir().unwrap();
        let repo = tempfile::tempdir().unwrap();
        let profile = base.path().join("test");
        fs::create_dir_all(profile.join("Desktop")).unwrap();
        fs::create_dir_all(profile.join("Documents")).unwrap();

        std::os::unix::fs::symlink(profile.join("Desktop"), repo.path().join("Desktop")).unwrap();
        std::os::unix::fs::symlink(base.path(), repo.path().join("Documents")).unwrap();

        let config = config_in(base.path(), repo.path(), &["Desktop", "Documents"]);
        let reports = collect(&config);

        assert_eq!(reports[0].state, "linked");
        assert_eq!(reports[1].state, "wrong-target");
        assert_eq!(
            reports[1].detail.as_deref(),
            Some(base.path().display().to_string().as_str())
        );
    }

    #[test]
    fn collect_reports_conflicts() {
        let base = tempfile::tempdir().unwrap();
        let repo = tempfile::tempdir().unwrap();
        fs::create_dir_all(base.path().join("test").join("Desktop")).unwrap();
        fs::write(repo.path().join("Desktop"), "in the way").unwrap();

        let config = config_in(base.path(), repo.path(), &["Desktop"]);
        let reports = collect(&config);

        assert_eq!(reports[0].state, "conflict");
        assert_eq!(reports[0].detail.as_deref(), Some("regular file"));
    }

    #[test]
    fn reports_serialise_to_json() {
        let base = tempfile::tempdir().unwrap();
        let repo = tempfile::tempdir().unwrap();
        let config = config_in(base.path(), repo.path(), &["Music"]);

        let json = serde_json::to_string(&collect(&config)).unwrap();
        assert!(json.contains("\"state\":\"no-source\""));
        assert!(!json.contains("\"alias\""), "alias is omitted when absent");
    }
}
