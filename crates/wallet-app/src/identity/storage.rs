//! Key-value session storage backends.
//!
//! A small synchronous string-keyed surface, enough to hold one session
//! record: a filesystem backend for production and an in-memory variant
//! for tests.

use super::error::IdentityError;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Synchronous string-keyed storage for small session records.
pub trait SessionStorage: Send + Sync {
    fn read(&self, key: &str) -> Result<Option<String>, IdentityError>;
    fn write(&self, key: &str, value: &str) -> Result<(), IdentityError>;
    fn remove(&self, key: &str) -> Result<(), IdentityError>;
}

/// Filesystem-backed storage: one JSON file per key under a directory.
#[derive(Debug, Clone)]
pub struct FsSessionStorage {
    dir: PathBuf,
}

impl FsSessionStorage {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl SessionStorage for FsSessionStorage {
    fn read(&self, key: &str) -> Result<Option<String>, IdentityError> {
        let path = self.path_for(key);
        match std::fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(IdentityError::Storage(err.to_string())),
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<(), IdentityError> {
        std::fs::create_dir_all(&self.dir).map_err(|e| IdentityError::Storage(e.to_string()))?;
        std::fs::write(self.path_for(key), value)
            .map_err(|e| IdentityError::Storage(e.to_string()))
    }

    fn remove(&self, key: &str) -> Result<(), IdentityError> {
        match std::fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(IdentityError::Storage(err.to_string())),
        }
    }
}

/// In-memory storage for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemorySessionStorage {
    entries: RwLock<HashMap<String, String>>,
}

impl MemorySessionStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a raw value, bypassing serialization. Lets tests plant corrupt
    /// records.
    pub fn insert_raw(&self, key: &str, value: &str) {
        self.entries
            .write()
            .insert(key.to_string(), value.to_string());
    }
}

impl SessionStorage for MemorySessionStorage {
    fn read(&self, key: &str) -> Result<Option<String>, IdentityError> {
        Ok(self.entries.read().get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), IdentityError> {
        self.entries
            .write()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), IdentityError> {
        self.entries.write().remove(key);
        Ok(())
    }
}
