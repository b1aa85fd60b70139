// Shared helpers for integration tests.
//
// Provides a temporary-directory-backed pair of (Windows users directory,
// repository root) so each integration test can set up an isolated
// environment without repeating filesystem boilerplate.
//
// Used by all integration test binaries that declare `mod common;`.
#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;

use winlink_cli::config::{Config, FolderSpec, WindowsBase};
use winlink_cli::logging::Logger;
use winlink_cli::platform::{Os, Platform};
use winlink_cli::tasks::Context;

/// The account name used for every test profile.
pub const TEST_USER: &str = "test";

/// An isolated test environment: a fake Windows users directory and an
/// empty repository root, both backed by [`tempfile::TempDir`] and deleted
/// on drop.
#[derive(Debug)]
pub struct TestEnv {
    /// Fake users directory (stands in for `/mnt/c/Users`).
    pub users: tempfile::TempDir,
    /// Repository root that receives the links.
    pub repo: tempfile::TempDir,
}

impl TestEnv {
    /// Create a fresh environment with an empty profile directory.
    pub fn new() -> Self {
        let users = tempfile::tempdir().expect("create users temp dir");
        let repo = tempfile::tempdir().expect("create repo temp dir");
        std::fs::create_dir_all(users.path().join(TEST_USER)).expect("create profile dir");
        Self { users, repo }
    }

    /// Path of the test user's profile directory.
    pub fn profile(&self) -> PathBuf {
        self.users.path().join(TEST_USER)
    }

    /// Create a folder inside the profile directory.
    pub fn with_windows_folder(self, name: &str) -> Self {
        std::fs::create_dir_all(self.profile().join(name)).expect("create windows folder");
        self
    }

    /// Path of a link site inside the repository root.
    pub fn site(&self, name: &str) -> PathBuf {
        self.repo.path().join(name)
    }

    /// Build a [`Config`] over this environment for the given folder specs
    /// (each `NAME` or `NAME=ALIAS`).
    pub fn config(&self, folders: &[&str]) -> Config {
        Config {
            root: self.repo.path().to_path_buf(),
            base: WindowsBase::new(self.users.path().to_path_buf(), TEST_USER.to_string()),
            folders: folders
                .iter()
                .map(|s| FolderSpec::parse(s).expect("parse folder spec"))
                .collect(),
        }
    }

    /// Build a task [`Context`] plus its logger for entry inspection.
    pub fn context(&self, folders: &[&str]) -> (Context, Arc<Logger>) {
        self.context_with_dry_run(folders, false)
    }

    /// Like [`context`](Self::context), with an explicit dry-run flag.
    pub fn context_with_dry_run(
        &self,
        folders: &[&str],
        dry_run: bool,
    ) -> (Context, Arc<Logger>) {
        let log = Arc::new(Logger::new("test"));
        let ctx = Context::new(
            self.config(folders),
            Platform::new(Os::Linux, true),
            Arc::clone(&log),
            dry_run,
        );
        (ctx, log)
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
