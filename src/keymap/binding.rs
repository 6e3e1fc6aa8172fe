//! KeyBind struct representing a mapping from a physical key to an action

use serde::Serialize;

/// A single binding of a physical key to a resolved action name
///
/// Values are immutable: a rebind replaces the whole `KeyBind`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct KeyBind {
    /// Physical key token as written in the source file (e.g. `w`, `mouse1`)
    key: String,
    /// Canonical, human-readable action name
    action: String,
}

impl KeyBind {
    /// Create a binding from a key token and a resolved action name
    pub fn new(key: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            action: action.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn action(&self) -> &str {
        &self.action
    }

    /// Check if this binding belongs to the given key
    pub fn matches_key(&self, key: &str) -> bool {
        self.key == key
    }

    /// Get display string for this binding
    pub fn display_string(&self) -> String {
        format!("{} → {}", self.key, self.action)
    }
}
