//! Error types and result aliases.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to list libraries in {path}: {source}")]
    ScanLibs {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("Libs root is not a directory: {0}")]
    LibsRootNotADirectory(PathBuf),

    #[error("Failed to read settings file {path}: {source}")]
    ReadSettings {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse settings file {path}: {source}")]
    ParseSettings {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Settings file {0} must contain a JSON object at the top level")]
    SettingsNotAnObject(PathBuf),

    #[error("Library path is not valid UTF-8: {0}")]
    NonUtf8Path(PathBuf),

    #[error("Failed to serialize settings: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Failed to write settings file {path}: {source}")]
    WriteSettings {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl Error {
    /// Returns the underlying I/O error kind, if this error came from the filesystem.
    pub fn io_kind(&self) -> Option<io::ErrorKind> {
        match self {
            Error::ScanLibs { source, .. } => source.io_error().map(|e| e.kind()),
            Error::ReadSettings { source, .. } | Error::WriteSettings { source, .. } => {
                Some(source.kind())
            }
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.io_kind() == Some(io::ErrorKind::NotFound)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
