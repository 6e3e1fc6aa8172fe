//! Key-bind configuration resolver
//!
//! Reads a game's quoted-token key-bind files, resolves raw action
//! descriptors to readable action names, and keeps a layered
//! key → action table (shipped defaults, then user overrides).

pub mod cli;
pub mod config;
pub mod config_paths;
pub mod keymap;
pub mod tracing;

// Re-export commonly used types
pub use config::ResolverConfig;
pub use keymap::{ActionNames, KeyBind, KeyBindError, KeyBindRepository, SharedKeyBinds};
