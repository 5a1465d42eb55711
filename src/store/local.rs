// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! File-backed key/value store with whole-value writes.
//!
//! The durable analog of browser local storage: one small text value per
//! key, replaced wholesale on every write. An in-memory mode backs tests
//! and offline operation without touching the filesystem.

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use crate::error::{AppError, Result};

/// Local key/value store.
#[derive(Debug)]
pub struct LocalStore {
    backing: Backing,
}

#[derive(Debug)]
enum Backing {
    /// One file per key under this directory.
    Dir(PathBuf),
    /// In-memory map (tests, offline mode).
    Memory(Mutex<HashMap<String, String>>),
}

impl LocalStore {
    /// Open a store rooted at the given directory, creating it if needed.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|e| {
            AppError::StorageUnavailable(format!(
                "cannot create store directory {}: {}",
                dir.display(),
                e
            ))
        })?;
        Ok(Self {
            backing: Backing::Dir(dir),
        })
    }

    /// Create a store that never touches disk.
    pub fn in_memory() -> Self {
        Self {
            backing: Backing::Memory(Mutex::new(HashMap::new())),
        }
    }

    /// Read the value under a key. An absent key is a normal outcome.
    pub fn get(&self, key: &str) -> Result<Option<String>> {
        match &self.backing {
            Backing::Dir(dir) => {
                let path = key_path(dir, key);
                match fs::read_to_string(&path) {
                    Ok(value) => Ok(Some(value)),
                    Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
                    Err(e) => Err(AppError::StorageUnavailable(format!(
                        "cannot read {}: {}",
                        path.display(),
                        e
                    ))),
                }
            }
            Backing::Memory(map) => Ok(lock(map).get(key).cloned()),
        }
    }

    /// Replace the value under a key in a single whole-value write.
    ///
    /// The caller hands over the fully serialized value; on disk it goes to
    /// a temp file first and is renamed over the old one, so readers never
    /// observe a partial value.
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        match &self.backing {
            Backing::Dir(dir) => {
                let path = key_path(dir, key);
                let tmp = path.with_extension("json.tmp");
                fs::write(&tmp, value).map_err(|e| {
                    AppError::StorageUnavailable(format!(
                        "cannot write {}: {}",
                        tmp.display(),
                        e
                    ))
                })?;
                fs::rename(&tmp, &path).map_err(|e| {
                    AppError::StorageUnavailable(format!(
                        "cannot replace {}: {}",
                        path.display(),
                        e
                    ))
                })
            }
            Backing::Memory(map) => {
                lock(map).insert(key.to_string(), value.to_string());
                Ok(())
            }
        }
    }

    /// Remove a key. Removing an absent key is a no-op.
    pub fn remove(&self, key: &str) -> Result<()> {
        match &self.backing {
            Backing::Dir(dir) => {
                let path = key_path(dir, key);
                match fs::remove_file(&path) {
                    Ok(()) => Ok(()),
                    Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
                    Err(e) => Err(AppError::StorageUnavailable(format!(
                        "cannot remove {}: {}",
                        path.display(),
                        e
                    ))),
                }
            }
            Backing::Memory(map) => {
                lock(map).remove(key);
                Ok(())
            }
        }
    }
}

fn key_path(dir: &Path, key: &str) -> PathBuf {
    dir.join(format!("{key}.json"))
}

/// A poisoned lock only means a writer panicked mid-update; the map itself
/// is still a valid map.
fn lock(map: &Mutex<HashMap<String, String>>) -> MutexGuard<'_, HashMap<String, String>> {
    map.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
