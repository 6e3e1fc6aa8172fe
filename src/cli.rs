//! Command-line argument parsing
//!
//! Supports:
//! - Listing the resolved binding table
//! - Looking up a key, or the keys bound to an action
//! - Checking that the configured sources load

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::config::ResolverConfig;

/// Resolve layered key-bind files into a key → action table
#[derive(Parser, Debug)]
#[command(name = "keybinds", version, about = "Resolve layered key-bind files")]
pub struct CliArgs {
    /// Config file (defaults to ~/.config/keybinds/config.yaml)
    #[arg(long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Default key-bind file
    #[arg(short = 'd', long, value_name = "FILE", global = true)]
    pub defaults: Option<PathBuf>,

    /// User override key-bind file
    #[arg(short = 'u', long, value_name = "FILE", global = true)]
    pub user: Option<PathBuf>,

    /// Extra action name table (YAML)
    #[arg(long, value_name = "FILE", global = true)]
    pub names: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    /// Print every binding in table order
    List {
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Print the action bound to a key (exit code 1 if unbound)
    Lookup { key: String },
    /// Print the keys bound to an action
    KeysFor { action: String },
    /// Load both sources and print a summary
    Check,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
    Yaml,
}

impl CliArgs {
    /// Resolve the effective configuration: the config file, overridden by flags
    pub fn resolve_config(&self) -> Result<ResolverConfig, String> {
        let base = match &self.config {
            Some(path) => ResolverConfig::load_from(path)?,
            None => ResolverConfig::load(),
        };

        Ok(base.merged_with(
            self.defaults.clone(),
            self.user.clone(),
            self.names.clone(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_list_with_format() {
        let args = CliArgs::try_parse_from([
            "keybinds", "--defaults", "d.cfg", "list", "--format", "json",
        ])
        .unwrap();

        assert_eq!(args.defaults, Some(PathBuf::from("d.cfg")));
        assert_eq!(
            args.command,
            CliCommand::List {
                format: OutputFormat::Json
            }
        );
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let args = CliArgs::try_parse_from([
            "keybinds", "lookup", "w", "-d", "d.cfg", "-u", "u.cfg",
        ])
        .unwrap();

        assert_eq!(args.command, CliCommand::Lookup { key: "w".into() });
        assert_eq!(args.user, Some(PathBuf::from("u.cfg")));
    }

    #[test]
    fn test_keys_for_subcommand_name() {
        let args = CliArgs::try_parse_from(["keybinds", "keys-for", "Jump"]).unwrap();
        assert_eq!(
            args.command,
            CliCommand::KeysFor {
                action: "Jump".into()
            }
        );
    }

    #[test]
    fn test_flags_override_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("config.yaml");
        std::fs::write(&config_path, "default_binds: a.cfg\nuser_binds: b.cfg\n").unwrap();

        let args = CliArgs::try_parse_from([
            "keybinds",
            "--config",
            config_path.to_str().unwrap(),
            "--defaults",
            "c.cfg",
            "check",
        ])
        .unwrap();
        let config = args.resolve_config().unwrap();

        assert_eq!(config.default_binds, Some(PathBuf::from("c.cfg")));
        assert_eq!(config.user_binds, Some(PathBuf::from("b.cfg")));
    }

    #[test]
    fn test_missing_subcommand_is_error() {
        assert!(CliArgs::try_parse_from(["keybinds"]).is_err());
    }
}
