//! Sync configuration.

use std::path::{Path, PathBuf};

/// Workspace root used when no other location is given.
pub const DEFAULT_WORKSPACE_ROOT: &str = "/workspace";

/// Where the libraries live and which settings file to keep in sync.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncConfig {
    /// Directory holding one subdirectory per library.
    pub libs_root: PathBuf,
    /// Editor settings file to rewrite.
    pub settings_path: PathBuf,
    /// Sort library paths by directory name instead of listing order.
    pub sort: bool,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self::for_workspace(DEFAULT_WORKSPACE_ROOT)
    }
}

impl SyncConfig {
    /// Derives `libs/` and `.vscode/settings.json` from a workspace root.
    pub fn for_workspace(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        Self {
            libs_root: root.join("libs"),
            settings_path: root.join(".vscode").join("settings.json"),
            sort: false,
        }
    }

    /// Sets the libs root.
    pub fn with_libs_root(mut self, dir: impl Into<PathBuf>) -> Self {
        self.libs_root = dir.into();
        self
    }

    /// Sets the settings file path.
    pub fn with_settings_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.settings_path = path.into();
        self
    }

    /// Enables or disables sorted output.
    pub fn with_sort(mut self, sort: bool) -> Self {
        self.sort = sort;
        self
    }
}
