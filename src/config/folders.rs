//! Folder list parsing and the built-in defaults.
use crate::error::ConfigError;

/// A folder to link: the Windows folder name plus an optional alias for the
/// link created in the repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderSpec {
    /// Folder name under the Windows user profile (e.g. `Downloads`).
    pub name: String,
    /// Name of the link inside the repository; defaults to `name`.
    pub alias: Option<String>,
}

impl FolderSpec {
    /// A spec with no alias.
    #[must_use]
    pub fn named(name: &str) -> Self {
        Self {
            name: name.to_string(),
            alias: None,
        }
    }

    /// Parse a `NAME` or `NAME=ALIAS` command-line value.
    ///
    /// The first `=` separates name from alias, so folder names themselves
    /// may contain spaces but not `=`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidFolderSpec`] when the name or alias is
    /// empty.
    pub fn parse(spec: &str) -> Result<Self, ConfigError> {
        let (name, alias) = match spec.split_once('=') {
            Some((name, alias)) => (name, Some(alias)),
            None => (spec, None),
        };
        if name.is_empty() {
            return Err(ConfigError::InvalidFolderSpec {
                spec: spec.to_string(),
                reason: "folder name is empty".to_string(),
            });
        }
        if let Some(alias) = alias
            && alias.is_empty()
        {
            return Err(ConfigError::InvalidFolderSpec {
                spec: spec.to_string(),
                reason: "alias is empty".to_string(),
            });
        }
        Ok(Self {
            name: name.to_string(),
            alias: alias.map(String::from),
        })
    }

    /// Name of the link inside the repository: the alias when present,
    /// otherwise the folder name.
    #[must_use]
    pub fn site_name(&self) -> &str {
        self.alias.as_deref().unwrap_or(&self.name)
    }

    /// Display label for reports: `Downloads` or `Downloads as My_Downloads`.
    #[must_use]
    pub fn label(&self) -> String {
        self.alias.as_ref().map_or_else(
            || self.name.clone(),
            |alias| format!("{} as {alias}", self.name),
        )
    }
}

/// The user-visible profile folders linked by default.
///
/// AppData and OneDrive are not tracked; neither are the legacy shell
/// aliases (My Documents, Application Data, …), which are already links on
/// the Windows side.
const DEFAULT_FOLDER_NAMES: &[&str] = &[
    "Contacts",
    "Desktop",
    "Documents",
    "Downloads",
    "Favorites",
    "Links",
    "Music",
    "Pictures",
    "Saved Games",
    "Searches",
    "Videos",
    ".vscode",
];

/// The built-in folder list, used when no `--folder` overrides are given.
#[must_use]
pub fn default_folders() -> Vec<FolderSpec> {
    DEFAULT_FOLDER_NAMES
        .iter()
        .map(|name| FolderSpec::named(name))
        .collect()
}
