use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use super::KeyValueStore;
use crate::error::SimError;

/// Store persisted as a single JSON object on disk.
///
/// The whole file is rewritten on every `set`; the store holds a handful of
/// entries at most.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    entries: Map<String, Value>,
}

impl JsonFileStore {
    /// Opens `path`, starting empty when the file does not exist yet.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, SimError> {
        let path = path.as_ref().to_path_buf();
        let entries = match fs::read_to_string(&path) {
            Ok(text) => match serde_json::from_str::<Value>(&text) {
                Ok(Value::Object(map)) => map,
                Ok(_) => {
                    return Err(SimError::Store(format!(
                        "{} does not contain a JSON object",
                        path.display()
                    )));
                }
                Err(err) => return Err(SimError::Store(format!("{}: {err}", path.display()))),
            },
            Err(err) if err.kind() == ErrorKind::NotFound => Map::new(),
            Err(err) => return Err(SimError::Store(format!("{}: {err}", path.display()))),
        };
        log::debug!("opened store {} with {} entries", path.display(), entries.len());
        Ok(Self { path, entries })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<(), SimError> {
        let text = serde_json::to_string_pretty(&self.entries)
            .map_err(|err| SimError::Store(err.to_string()))?;
        fs::write(&self.path, text)
            .map_err(|err| SimError::Store(format!("{}: {err}", self.path.display())))
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<String> {
        match self.entries.get(key)? {
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// A failed write leaves the previous value in place.
    fn set(&mut self, key: &str, value: String) -> Result<(), SimError> {
        let previous = self.entries.insert(key.to_string(), Value::String(value));
        if let Err(err) = self.flush() {
            match previous {
                Some(old) => self.entries.insert(key.to_string(), old),
                None => self.entries.remove(key),
            };
            return Err(err);
        }
        Ok(())
    }
}
