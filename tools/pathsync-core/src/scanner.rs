//! Discovers library directories under the libs root.

use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

use crate::error::{Error, Result};

/// Lists the direct subdirectories of a libs root.
///
/// Entries come back in the order the filesystem lists them unless sorting
/// is enabled. Plain files are skipped; symlinks count when they resolve to
/// a directory.
pub struct LibScanner {
    libs_root: PathBuf,
    sort: bool,
}

impl LibScanner {
    pub fn new(libs_root: impl AsRef<Path>) -> Self {
        Self {
            libs_root: libs_root.as_ref().to_path_buf(),
            sort: false,
        }
    }

    pub fn sorted(mut self, sort: bool) -> Self {
        self.sort = sort;
        self
    }

    pub fn scan(&self) -> Result<Vec<PathBuf>> {
        // walkdir yields a non-directory root as a lone entry rather than an error.
        if self.libs_root.exists() && !self.libs_root.is_dir() {
            return Err(Error::LibsRootNotADirectory(self.libs_root.clone()));
        }

        let mut walker = WalkDir::new(&self.libs_root).min_depth(1).max_depth(1);
        if self.sort {
            walker = walker.sort_by_file_name();
        }

        let mut libs = Vec::new();
        for entry in walker {
            let entry = entry.map_err(|source| Error::ScanLibs {
                path: self.libs_root.clone(),
                source,
            })?;
            if !entry.path().is_dir() {
                continue;
            }
            let lib = self.libs_root.join(entry.file_name());
            debug!("Found library {}", lib.display());
            libs.push(lib);
        }

        Ok(libs)
    }
}
