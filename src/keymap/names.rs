//! Action name resolution
//!
//! Maps raw action descriptors (`+forward`, `slot1`, ...) to canonical,
//! human-readable action names. Tables are YAML files of the form:
//!
//! ```yaml
//! names:
//!   "+forward": "MoveForward"
//! ```

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use serde::Deserialize;

/// Action name table embedded at compile time
const BUILTIN_ACTION_NAMES_YAML: &str = include_str!("../../action_names.yaml");

/// Lookup from raw descriptor to canonical action name
pub trait NameResolver {
    /// Canonical name for `descriptor`, or `None` if it is not known
    fn resolve(&self, descriptor: &str) -> Option<&str>;

    fn has_key(&self, descriptor: &str) -> bool {
        self.resolve(descriptor).is_some()
    }
}

impl<R: NameResolver + ?Sized> NameResolver for &R {
    fn resolve(&self, descriptor: &str) -> Option<&str> {
        (**self).resolve(descriptor)
    }
}

impl<R: NameResolver + ?Sized> NameResolver for Arc<R> {
    fn resolve(&self, descriptor: &str) -> Option<&str> {
        (**self).resolve(descriptor)
    }
}

/// Root structure of an action name YAML file
#[derive(Debug, Deserialize)]
struct ActionNamesConfig {
    #[serde(default)]
    names: HashMap<String, String>,
}

/// Hash-backed descriptor → name table
#[derive(Debug, Clone, Default)]
pub struct ActionNames {
    names: HashMap<String, String>,
}

impl ActionNames {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// The table shipped with the crate
    pub fn builtin() -> Self {
        match parse_action_names_yaml(BUILTIN_ACTION_NAMES_YAML) {
            Ok(names) => names,
            Err(e) => {
                tracing::warn!("Failed to parse embedded action names: {}", e);
                Self::new()
            }
        }
    }

    /// Merge another table on top of this one (entries in `other` win)
    pub fn extend(&mut self, other: ActionNames) {
        self.names.extend(other.names);
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl NameResolver for ActionNames {
    fn resolve(&self, descriptor: &str) -> Option<&str> {
        self.names.get(descriptor).map(String::as_str)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ActionNames {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            names: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Load an action name table from a YAML file
pub fn load_action_names_file(path: &Path) -> Result<ActionNames, NamesError> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| NamesError::IoError(format!("{}: {}", path.display(), e)))?;

    parse_action_names_yaml(&content)
}

/// Parse an action name table from a YAML string
pub fn parse_action_names_yaml(yaml: &str) -> Result<ActionNames, NamesError> {
    let config: ActionNamesConfig =
        serde_yaml::from_str(yaml).map_err(|e| NamesError::ParseError(e.to_string()))?;

    if let Some((descriptor, _)) = config.names.iter().find(|(_, name)| name.trim().is_empty()) {
        return Err(NamesError::EmptyName(descriptor.clone()));
    }

    Ok(ActionNames {
        names: config.names,
    })
}

/// Errors that can occur when loading action name tables
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NamesError {
    IoError(String),
    ParseError(String),
    EmptyName(String),
}

impl std::fmt::Display for NamesError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NamesError::IoError(e) => write!(f, "IO error: {}", e),
            NamesError::ParseError(e) => write!(f, "Parse error: {}", e),
            NamesError::EmptyName(d) => write!(f, "Empty action name for descriptor: {}", d),
        }
    }
}

impl std::error::Error for NamesError {}
