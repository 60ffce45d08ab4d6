//! Reading and rewriting the editor settings file.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Map, Serializer, Value};
use tracing::{debug, info};

use crate::error::{Error, Result};

/// Settings keys holding the Python search paths.
///
/// The first drives static analysis, the second autocompletion.
pub const EXTRA_PATHS_KEYS: [&str; 2] = [
    "python.analysis.extraPaths",
    "python.autoComplete.extraPaths",
];

const INDENT: &[u8] = b"    ";

/// An editor settings file loaded into memory.
///
/// Keys keep their file order; keys added by [`SettingsDocument::set_paths`]
/// are appended after the existing ones.
#[derive(Debug, Clone)]
pub struct SettingsDocument {
    path: PathBuf,
    root: Map<String, Value>,
}

impl SettingsDocument {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = fs::read_to_string(&path).map_err(|source| Error::ReadSettings {
            path: path.clone(),
            source,
        })?;
        let value: Value =
            serde_json::from_str(&content).map_err(|source| Error::ParseSettings {
                path: path.clone(),
                source,
            })?;

        match value {
            Value::Object(root) => {
                debug!("Loaded {} settings from {}", root.len(), path.display());
                Ok(Self { path, root })
            }
            _ => Err(Error::SettingsNotAnObject(path)),
        }
    }

    /// Returns the current value of every extra-paths key.
    pub fn paths(&self) -> Vec<Option<&Value>> {
        EXTRA_PATHS_KEYS.iter().map(|key| self.root.get(*key)).collect()
    }

    /// Replaces both extra-paths keys with `libs`.
    ///
    /// Returns `true` when either key held a different value before.
    pub fn set_paths(&mut self, libs: &[PathBuf]) -> Result<bool> {
        let entries = libs
            .iter()
            .map(|lib| {
                lib.to_str()
                    .map(|s| Value::String(s.to_string()))
                    .ok_or_else(|| Error::NonUtf8Path(lib.clone()))
            })
            .collect::<Result<Vec<Value>>>()?;
        let new_value = Value::Array(entries);

        let mut changed = false;
        for key in EXTRA_PATHS_KEYS {
            let previous = self.root.insert(key.to_string(), new_value.clone());
            if previous.as_ref() != Some(&new_value) {
                changed = true;
            }
        }
        Ok(changed)
    }

    /// Renders the document with four-space indentation and no trailing newline.
    ///
    /// Non-ASCII characters are written as raw UTF-8, not `\uXXXX` escapes, so
    /// files produced by Python's `json.dump` may differ byte-wise after a rewrite.
    /// Numbers keep their original text.
    pub fn to_pretty_vec(&self) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        let formatter = PrettyFormatter::with_indent(INDENT);
        let mut serializer = Serializer::with_formatter(&mut buf, formatter);
        self.root.serialize(&mut serializer)?;
        Ok(buf)
    }

    /// Overwrites the file the document was loaded from.
    pub fn save(&self) -> Result<()> {
        let content = self.to_pretty_vec()?;
        fs::write(&self.path, content).map_err(|source| Error::WriteSettings {
            path: self.path.clone(),
            source,
        })?;
        info!("Updated {}", self.path.display());
        Ok(())
    }
}
