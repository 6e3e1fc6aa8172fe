//! Layered key-bind table built from quoted-token config files
//!
//! This module:
//! - Parses lines like `bind "w" "+forward"` into `(key, descriptor)` pairs
//! - Resolves raw descriptors to canonical action names
//! - Layers a user file over a shipped default file, including explicit
//!   `"<unbound>"` removals
//!
//! # Architecture
//!
//! ```text
//! file bytes → parse_line() → Directive → NameResolver → KeyBindRepository
//! ```
//!
//! # Loading Key Binds
//!
//! ```ignore
//! let mut repo = KeyBindRepository::new(ActionNames::builtin());
//! repo.init_defaults("default.cfg")?;
//! repo.init_modified_key_binds("user.cfg")?;
//!
//! let forward = repo.lookup("w");
//! ```

mod binding;
mod names;
mod parser;
mod repository;
mod shared;

pub use binding::KeyBind;
pub use names::{
    load_action_names_file, parse_action_names_yaml, ActionNames, NameResolver, NamesError,
};
pub use parser::{parse_line, parse_source, Directive, UNBOUND};
pub use repository::{DirectiveOutcome, KeyBindError, KeyBindRepository, LoadReport};
pub use shared::SharedKeyBinds;
