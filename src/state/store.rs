//! Persisted status slot - one plain-text value, last write wins

use parking_lot::Mutex;
use std::path::PathBuf;

/// Errors from the underlying store
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Failed to read status from '{}': {}", .0.display(), .1)]
    Read(PathBuf, std::io::Error),

    #[error("Failed to write status to '{}': {}", .0.display(), .1)]
    Write(PathBuf, std::io::Error),
}

/// A single process-wide slot holding the last badge state name
pub trait StatusStore: Send + Sync {
    /// Read the stored value, `None` when nothing was stored
    fn load(&self) -> Result<Option<String>, StoreError>;

    /// Replace the stored value
    fn save(&self, value: &str) -> Result<(), StoreError>;
}

/// Slot backed by a text file
#[derive(Debug, Clone)]
pub struct FileStatusStore {
    path: PathBuf,
}

impl FileStatusStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl StatusStore for FileStatusStore {
    fn load(&self) -> Result<Option<String>, StoreError> {
        match std::fs::read_to_string(&self.path) {
            Ok(content) => {
                let value = content.trim();
                Ok((!value.is_empty()).then(|| value.to_string()))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::Read(self.path.clone(), e)),
        }
    }

    fn save(&self, value: &str) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| StoreError::Write(self.path.clone(), e))?;
        }
        std::fs::write(&self.path, value).map_err(|e| StoreError::Write(self.path.clone(), e))
    }
}

/// In-memory slot, for tests and for hosts without a filesystem
#[derive(Debug, Default)]
pub struct MemoryStatusStore {
    value: Mutex<Option<String>>,
    writes: Mutex<usize>,
}

impl MemoryStatusStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(value: impl Into<String>) -> Self {
        Self {
            value: Mutex::new(Some(value.into())),
            writes: Mutex::new(0),
        }
    }

    pub fn value(&self) -> Option<String> {
        self.value.lock().clone()
    }

    /// Number of successful saves
    pub fn writes(&self) -> usize {
        *self.writes.lock()
    }
}

impl StatusStore for MemoryStatusStore {
    fn load(&self) -> Result<Option<String>, StoreError> {
        Ok(self.value())
    }

    fn save(&self, value: &str) -> Result<(), StoreError> {
        *self.value.lock() = Some(value.to_string());
        *self.writes.lock() += 1;
        Ok(())
    }
}
