//! Windows base path construction.
use std::path::{Path, PathBuf};

/// The Windows users directory as mounted by WSL.
pub const DEFAULT_USERS_DIR: &str = "/mnt/c/Users";

/// The external base location that folder links point into:
/// `<users_dir>/<user>`.
///
/// Both components are explicit constructor arguments rather than ambient
/// process state, so the reconciler can be pointed at a temp directory in
/// tests.
#[derive(Debug, Clone)]
pub struct WindowsBase {
    users_dir: PathBuf,
    user: String,
}

impl WindowsBase {
    /// Create a base from a users directory and an account name.
    #[must_use]
    pub const fn new(users_dir: PathBuf, user: String) -> Self {
        Self { users_dir, user }
    }

    /// The Windows account name.
    #[must_use]
    pub fn user(&self) -> &str {
        &self.user
    }

    /// The user's profile directory: `<users_dir>/<user>`.
    #[must_use]
    pub fn dir(&self) -> PathBuf {
        self.users_dir.join(&self.user)
    }

    /// Absolute path of a folder under the user's profile directory.
    #[must_use]
    pub fn path_for(&self, folder: &str) -> PathBuf {
        self.dir().join(folder)
    }

    /// A base rooted at `dir` directly, without a user component (for tests
    /// against temp directories).
    #[must_use]
    pub fn at(dir: &Path, user: &str) -> Self {
        Self::new(dir.to_path_buf(), user.to_string())
    }
}
