//! Core library for synchronizing editor search paths with workspace libraries.

pub mod config;
pub mod error;
pub mod scanner;
pub mod settings;
pub mod sync;

pub use config::SyncConfig;
pub use error::{Error, Result};
pub use scanner::LibScanner;
pub use settings::{SettingsDocument, EXTRA_PATHS_KEYS};
pub use sync::{check, sync, SyncReport};
