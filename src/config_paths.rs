//! Centralized configuration paths for keybinds
//!
//! All config files live under:
//! - Unix/macOS: `~/.config/keybinds/`
//! - Windows: `%APPDATA%\keybinds\`

use std::{env, fs, path::PathBuf};

const APP_DIR: &str = "keybinds";

/// Base config directory for keybinds
///
/// Unix/macOS:
///   - If XDG_CONFIG_HOME is set: `$XDG_CONFIG_HOME/keybinds`
///   - Else: `~/.config/keybinds`
///
/// Windows:
///   - `%APPDATA%\keybinds`
pub fn config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        env::var("APPDATA")
            .ok()
            .map(|appdata| PathBuf::from(appdata).join(APP_DIR))
    }

    #[cfg(not(target_os = "windows"))]
    {
        env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
            .map(|config| config.join(APP_DIR))
    }
}

/// `~/.config/keybinds/config.yaml`
pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.yaml"))
}

/// `~/.config/keybinds/action_names.yaml`
pub fn action_names_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("action_names.yaml"))
}

/// `~/.config/keybinds/logs/`
pub fn logs_dir() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("logs"))
}

/// Ensure logs dir exists, returning it
pub fn ensure_logs_dir() -> Result<PathBuf, String> {
    let logs = logs_dir().ok_or_else(|| "No config directory available".to_string())?;
    fs::create_dir_all(&logs)
        .map_err(|e| format!("Failed to create log directory {}: {}", logs.display(), e))?;
    Ok(logs)
}
