//! Thread-safe handle around a `KeyBindRepository`
//!
//! Loads and reloads hold the write lock for their whole duration, so readers
//! never observe a half-populated table.

use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::binding::KeyBind;
use super::names::NameResolver;
use super::repository::{KeyBindError, KeyBindRepository, LoadReport};

/// Cloneable, lock-protected repository handle
#[derive(Debug)]
pub struct SharedKeyBinds<R> {
    inner: Arc<RwLock<KeyBindRepository<R>>>,
}

impl<R> Clone for SharedKeyBinds<R> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<R: NameResolver> SharedKeyBinds<R> {
    pub fn new(repository: KeyBindRepository<R>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(repository)),
        }
    }

    // Loads build the new table aside and assign it in one step, so a panic
    // mid-load leaves the previous table intact behind a poisoned lock.
    fn read(&self) -> RwLockReadGuard<'_, KeyBindRepository<R>> {
        self.inner.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, KeyBindRepository<R>> {
        self.inner.write().unwrap_or_else(|e| e.into_inner())
    }

    pub fn init_defaults(&self, path: impl AsRef<Path>) -> Result<LoadReport, KeyBindError> {
        self.write().init_defaults(path)
    }

    pub fn init_modified_key_binds(
        &self,
        path: impl AsRef<Path>,
    ) -> Result<LoadReport, KeyBindError> {
        self.write().init_modified_key_binds(path)
    }

    pub fn reload_binds(&self) -> Result<LoadReport, KeyBindError> {
        self.write().reload_binds()
    }

    /// Owned copy of the current binding for a key
    pub fn lookup(&self, key: &str) -> Option<KeyBind> {
        self.read().lookup(key).cloned()
    }

    pub fn keys_for_action(&self, action: &str) -> Vec<KeyBind> {
        self.read()
            .keys_for_action(action)
            .into_iter()
            .cloned()
            .collect()
    }

    pub fn snapshot(&self) -> Vec<KeyBind> {
        self.read().snapshot()
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    pub fn default_path(&self) -> Option<PathBuf> {
        self.read().default_path().map(Path::to_path_buf)
    }

    pub fn user_path(&self) -> Option<PathBuf> {
        self.read().user_path().map(Path::to_path_buf)
    }

    /// Run `f` against the locked repository
    pub fn with<T>(&self, f: impl FnOnce(&KeyBindRepository<R>) -> T) -> T {
        f(&self.read())
    }
}
