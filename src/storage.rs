//! String-keyed persistent storage shared by the theme and progress modules.

use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

use dirs_next as dirs;

/// Key for the persisted theme preference.
pub const THEME_KEY: &str = "theme";
/// Key for the serialized progress history.
pub const PROGRESS_KEY: &str = "progressData";

const DIR: &str = "fitness_tracker";
const FILE: &str = "storage.json";

#[derive(Debug)]
pub enum StorageError {
    Io(std::io::Error),
    Json(serde_json::Error),
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageError::Io(e) => write!(f, "storage I/O failed: {e}"),
            StorageError::Json(e) => write!(f, "storage encoding failed: {e}"),
        }
    }
}

impl std::error::Error for StorageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StorageError::Io(e) => Some(e),
            StorageError::Json(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for StorageError {
    fn from(e: std::io::Error) -> Self {
        StorageError::Io(e)
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(e: serde_json::Error) -> Self {
        StorageError::Json(e)
    }
}

/// A minimal key-value store with string keys and string values.
pub trait Storage {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Determine where the storage file lives.
///
/// `FITNESS_TRACKER_STORAGE` takes precedence over the platform config
/// directory.
pub fn resolve_storage_path() -> Option<PathBuf> {
    std::env::var_os("FITNESS_TRACKER_STORAGE")
        .map(PathBuf::from)
        .or_else(|| dirs::config_dir().map(|p| p.join(DIR).join(FILE)))
}

/// Storage backed by a single JSON object on disk.
///
/// Every write rewrites the whole file, so the file always holds the last
/// complete state.
pub struct FileStorage {
    path: PathBuf,
    items: BTreeMap<String, String>,
}

impl FileStorage {
    /// Open the store at `path`. A missing or unreadable file yields an empty
    /// store.
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref().to_path_buf();
        let items = match std::fs::read_to_string(&path) {
            Ok(data) => match serde_json::from_str(&data) {
                Ok(items) => items,
                Err(e) => {
                    log::warn!("Ignoring unreadable storage file {}: {e}", path.display());
                    BTreeMap::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => {
                log::warn!("Could not read storage file {}: {e}", path.display());
                BTreeMap::new()
            }
        };
        log::debug!("Opened storage {} with {} keys", path.display(), items.len());
        Self { path, items }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_string_pretty(&self.items)?;
        std::fs::write(&self.path, data)?;
        Ok(())
    }
}

impl Storage for FileStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.get(key).cloned()
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items.insert(key.to_string(), value.to_string());
        self.flush()
    }
}

/// In-process storage, used when no config directory exists and in tests.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: HashMap<String, String>,
}

impl Storage for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.get(key).cloned()
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
