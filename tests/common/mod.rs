//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::path::PathBuf;

use keybinds::keymap::{ActionNames, NameResolver};
use tempfile::TempDir;

/// Resolver with a small fixed table, independent of the built-in names
pub fn test_names() -> ActionNames {
    [
        ("+forward", "MoveForward"),
        ("+back", "MoveBackward"),
        ("+left", "MoveLeft"),
        ("+right", "MoveRight"),
        ("+jump", "Jump"),
        ("+duck", "Crouch"),
        ("+attack", "Attack"),
    ]
    .into_iter()
    .collect()
}

/// Resolver that knows nothing; every descriptor is dropped
pub struct EmptyResolver;

impl NameResolver for EmptyResolver {
    fn resolve(&self, _descriptor: &str) -> Option<&str> {
        None
    }
}

/// Temporary directory holding key-bind source files
pub struct Sources {
    dir: TempDir,
}

impl Sources {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("create temp dir"),
        }
    }

    /// Write `content` to `name`, returning its path
    pub fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.path(name);
        std::fs::write(&path, content).expect("write source file");
        path
    }

    /// Path to `name` inside the directory, whether or not it exists
    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }
}
