//! The read-modify-write cycle that keeps the settings file current.

use std::path::PathBuf;

use serde::Serialize;
use tracing::info;

use crate::config::SyncConfig;
use crate::error::Result;
use crate::scanner::LibScanner;
use crate::settings::SettingsDocument;

/// Outcome of a sync or check run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SyncReport {
    pub libs_root: PathBuf,
    pub settings_path: PathBuf,
    pub libraries: Vec<PathBuf>,
    /// Whether the extra-paths keys differed from `libraries` before the run.
    pub changed: bool,
}

fn prepare(config: &SyncConfig) -> Result<(SettingsDocument, SyncReport)> {
    let libraries = LibScanner::new(&config.libs_root)
        .sorted(config.sort)
        .scan()?;
    let mut document = SettingsDocument::load(&config.settings_path)?;
    let changed = document.set_paths(&libraries)?;

    let report = SyncReport {
        libs_root: config.libs_root.clone(),
        settings_path: config.settings_path.clone(),
        libraries,
        changed,
    };
    Ok((document, report))
}

/// Points both Python extra-paths settings at the libraries found on disk.
///
/// The settings file is always rewritten, even when nothing changed, so two
/// runs over an unchanged filesystem leave byte-identical files. Any failure
/// before the write leaves the file untouched.
pub fn sync(config: &SyncConfig) -> Result<SyncReport> {
    let (document, report) = prepare(config)?;
    document.save()?;
    info!(
        "Synced {} libraries from {}",
        report.libraries.len(),
        report.libs_root.display()
    );
    Ok(report)
}

/// Computes what [`sync`] would write without touching the settings file.
pub fn check(config: &SyncConfig) -> Result<SyncReport> {
    let (_, report) = prepare(config)?;
    Ok(report)
}
