use std::path::{Path, PathBuf};

use glam::Vec3;
use serde_json::{Map, Value};

use super::{decode_position, encode_position, PositionStore};
use crate::error::PinwallError;

/// JSON-file-backed position store with buffered writes.
///
/// The file holds one object mapping item id to the JSON text of an
/// `[x, y, z]` array. `set` only touches memory and marks the store dirty;
/// [`flush`](Self::flush) writes the whole object back, and dropping the
/// store flushes whatever is still pending.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    entries: Map<String, Value>,
    dirty: bool,
}

impl JsonFileStore {
    /// Open the store at `path`.
    ///
    /// A missing, empty or unparsable file is an empty store; only I/O
    /// failures are errors.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, PinwallError> {
        let path = path.into();
        let entries = match std::fs::read_to_string(&path) {
            Ok(content) if content.trim().is_empty() => Map::new(),
            Ok(content) => parse_entries(&content).unwrap_or_else(|e| {
                log::warn!("Ignoring unreadable position store {}: {e}", path.display());
                Map::new()
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Map::new(),
            Err(e) => return Err(PinwallError::Io(e)),
        };
        log::debug!(
            "Opened position store {} with {} entries",
            path.display(),
            entries.len()
        );
        Ok(Self {
            path,
            entries,
            dirty: false,
        })
    }

    /// Empty store that will write to `path` on flush, ignoring whatever is
    /// there now.
    #[must_use]
    pub fn empty(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            entries: Map::new(),
            dirty: false,
        }
    }

    /// Backing file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether there are writes not yet persisted.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Persist buffered writes. A no-op when nothing changed.
    pub fn flush(&mut self) -> Result<(), PinwallError> {
        if !self.dirty {
            return Ok(());
        }
        let content = serde_json::to_string_pretty(&self.entries)
            .map_err(|e| PinwallError::StoreParse(e.to_string()))?;
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, content)?;
        std::fs::rename(&tmp, &self.path)?;
        self.dirty = false;
        log::info!(
            "Flushed {} positions to {}",
            self.entries.len(),
            self.path.display()
        );
        Ok(())
    }
}

fn parse_entries(content: &str) -> Result<Map<String, Value>, PinwallError> {
    match serde_json::from_str::<Value>(content) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => Err(PinwallError::StoreParse(
            "expected a JSON object of id → position".into(),
        )),
        Err(e) => Err(PinwallError::StoreParse(e.to_string())),
    }
}

impl Drop for JsonFileStore {
    fn drop(&mut self) {
        if let Err(e) = self.flush() {
            log::warn!("Lost unsaved positions for {}: {e}", self.path.display());
        }
    }
}

impl PositionStore for JsonFileStore {
    fn get(&self, id: &str) -> Option<Vec3> {
        let value = self.entries.get(id)?;
        let position = decode_position(value);
        if position.is_none() {
            log::warn!("Ignoring malformed stored position for '{id}': {value}");
        }
        position
    }

    fn set(&mut self, id: &str, position: Vec3) {
        let _ = self.entries.insert(id.to_owned(), encode_position(position));
        self.dirty = true;
    }
}
