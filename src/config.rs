//! Resolver configuration persistence
//!
//! Stores the default/user key-bind file locations in
//! `~/.config/keybinds/config.yaml`

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Which files the resolver loads
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolverConfig {
    /// Shipped key-bind file (required to load anything)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_binds: Option<PathBuf>,

    /// User override file, layered on top of the defaults
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_binds: Option<PathBuf>,

    /// Extra action name table merged over the built-in names
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_names: Option<PathBuf>,
}

impl ResolverConfig {
    /// Load config from the default location, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(config) => {
                tracing::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                tracing::warn!("{}", e);
                Self::default()
            }
        }
    }

    /// Load config from a specific file
    pub fn load_from(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config at {}: {}", path.display(), e))?;

        serde_yaml::from_str(&content)
            .map_err(|e| format!("Failed to parse config at {}: {}", path.display(), e))
    }

    /// Save config to a specific file
    ///
    /// Creates the parent directory if it doesn't exist.
    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        std::fs::write(path, content)
            .map_err(|e| format!("Failed to write config to {}: {}", path.display(), e))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Override fields with any values given explicitly (e.g. CLI flags)
    pub fn merged_with(
        mut self,
        default_binds: Option<PathBuf>,
        user_binds: Option<PathBuf>,
        action_names: Option<PathBuf>,
    ) -> Self {
        if default_binds.is_some() {
            self.default_binds = default_binds;
        }
        if user_binds.is_some() {
            self.user_binds = user_binds;
        }
        if action_names.is_some() {
            self.action_names = action_names;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_empty() {
        let config = ResolverConfig::default();
        assert_eq!(config.default_binds, None);
        assert_eq!(config.user_binds, None);
        assert_eq!(config.action_names, None);
    }

    #[test]
    fn test_missing_fields_default_to_none() {
        let config: ResolverConfig =
            serde_yaml::from_str("default_binds: /games/cfg/default.cfg\n").unwrap();
        assert_eq!(
            config.default_binds,
            Some(PathBuf::from("/games/cfg/default.cfg"))
        );
        assert_eq!(config.user_binds, None);
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.yaml");
        let config = ResolverConfig {
            default_binds: Some(PathBuf::from("default.cfg")),
            user_binds: Some(PathBuf::from("user.cfg")),
            action_names: None,
        };

        config.save_to(&path).unwrap();

        assert_eq!(ResolverConfig::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_load_from_missing_file_errors() {
        let err = ResolverConfig::load_from(Path::new("/nonexistent/config.yaml")).unwrap_err();
        assert!(err.contains("Failed to read config"));
    }

    #[test]
    fn test_merged_with_prefers_explicit_values() {
        let config = ResolverConfig {
            default_binds: Some(PathBuf::from("a.cfg")),
            user_binds: Some(PathBuf::from("b.cfg")),
            action_names: None,
        }
        .merged_with(Some(PathBuf::from("c.cfg")), None, None);

        assert_eq!(config.default_binds, Some(PathBuf::from("c.cfg")));
        assert_eq!(config.user_binds, Some(PathBuf::from("b.cfg")));
    }
}
