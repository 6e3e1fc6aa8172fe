//! KeyBindRepository: the layered key → action binding table
//!
//! Loading order (each layer overrides the previous):
//! 1. Default source (shipped key-bind file)
//! 2. User source (optional overrides, may unbind default keys)

use std::path::{Path, PathBuf};

use super::binding::KeyBind;
use super::names::NameResolver;
use super::parser::{parse_source, Directive};

/// What applying a single directive did to the table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectiveOutcome {
    /// A new binding was appended
    Inserted,
    /// An existing binding for the key was replaced in place
    Replaced,
    /// Unbind directive; number of bindings removed (0 if the key was unbound)
    Removed(usize),
    /// Descriptor unknown to the resolver, nothing changed
    Unknown,
}

/// Summary of one or more source loads
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Directives that inserted or replaced a binding
    pub applied: usize,
    /// Bindings removed by unbind directives
    pub removed: usize,
    /// Directives dropped because the descriptor was not recognized
    pub ignored: usize,
    /// The user source could not be read while rebuilding the table
    ///
    /// Only `reload_binds` sets this: it reports one result for both layers,
    /// so a missing user file is flagged here rather than returned as an
    /// error. `init_modified_key_binds` returns `SourceUnavailable` instead.
    pub user_missing: bool,
}

impl LoadReport {
    fn record(&mut self, outcome: DirectiveOutcome) {
        match outcome {
            DirectiveOutcome::Inserted | DirectiveOutcome::Replaced => self.applied += 1,
            DirectiveOutcome::Removed(n) => self.removed += n,
            DirectiveOutcome::Unknown => self.ignored += 1,
        }
    }
}

impl std::ops::AddAssign for LoadReport {
    fn add_assign(&mut self, rhs: Self) {
        self.applied += rhs.applied;
        self.removed += rhs.removed;
        self.ignored += rhs.ignored;
        self.user_missing |= rhs.user_missing;
    }
}

/// Authoritative table of current key bindings
///
/// Bindings are kept in insertion order. Rebinding an existing key keeps its
/// position; binding a new key appends.
#[derive(Debug)]
pub struct KeyBindRepository<R> {
    binds: Vec<KeyBind>,
    resolver: R,
    default_path: Option<PathBuf>,
    user_path: Option<PathBuf>,
}

impl<R: NameResolver> KeyBindRepository<R> {
    /// Create an empty repository resolving descriptors through `resolver`
    pub fn new(resolver: R) -> Self {
        Self {
            binds: Vec::new(),
            resolver,
            default_path: None,
            user_path: None,
        }
    }

    /// Record `path` as the default source and load it on top of the table
    ///
    /// The path is remembered even if the file can't be read, so a later
    /// `reload_binds` retries it.
    pub fn init_defaults(&mut self, path: impl AsRef<Path>) -> Result<LoadReport, KeyBindError> {
        let path = path.as_ref();
        self.default_path = Some(path.to_path_buf());
        tracing::info!("Initializing default key binds from {}", path.display());
        self.load_file(path)
    }

    /// Record `path` as the user source and load it on top of the table
    pub fn init_modified_key_binds(
        &mut self,
        path: impl AsRef<Path>,
    ) -> Result<LoadReport, KeyBindError> {
        let path = path.as_ref();
        self.user_path = Some(path.to_path_buf());
        tracing::info!("Initializing modified key binds from {}", path.display());
        self.load_file(path)
    }

    /// Clear the table and re-apply the remembered default and user sources
    ///
    /// Fails with `NotInitialized` if no default source was ever recorded; the
    /// table is left untouched in that case. Otherwise the table is rebuilt
    /// from scratch and swapped in once both layers have been applied. An
    /// unreadable default source leaves only the user layer in the rebuilt
    /// table and is returned as `SourceUnavailable`; an unreadable user source
    /// is flagged with `LoadReport::user_missing`.
    pub fn reload_binds(&mut self) -> Result<LoadReport, KeyBindError> {
        let Some(default_path) = self.default_path.as_deref() else {
            tracing::error!("Reload requested before default key binds were initialized");
            return Err(KeyBindError::NotInitialized);
        };

        let mut binds = Vec::new();
        let mut report = LoadReport::default();

        let defaults = read_source(default_path)
            .map(|source| report += self.build(&source, &mut binds));

        if let Some(user_path) = self.user_path.as_deref() {
            match read_source(user_path) {
                Ok(source) => report += self.build(&source, &mut binds),
                Err(e) => {
                    tracing::warn!("Reload skipped user key binds: {}", e);
                    report.user_missing = true;
                }
            }
        }

        self.binds = binds;
        defaults?;

        tracing::info!("Key binds reloaded ({} bindings)", self.binds.len());
        Ok(report)
    }

    fn load_file(&mut self, path: &Path) -> Result<LoadReport, KeyBindError> {
        let source = read_source(path)?;
        let report = self.apply_source(&source);
        tracing::info!(
            "Loaded {} ({} applied, {} removed, {} ignored, {} bindings total)",
            path.display(),
            report.applied,
            report.removed,
            report.ignored,
            self.binds.len()
        );
        Ok(report)
    }

    /// Apply every directive in `source`, in order
    ///
    /// The directives are applied to a copy of the table, which replaces the
    /// current one only after the whole source has been processed.
    pub fn apply_source(&mut self, source: &str) -> LoadReport {
        let mut binds = self.binds.clone();
        let report = self.build(source, &mut binds);
        self.binds = binds;
        report
    }

    /// Apply a single directive to the table
    pub fn apply_directive(&mut self, directive: Directive<'_>) -> DirectiveOutcome {
        apply_to(&mut self.binds, &self.resolver, directive)
    }

    fn build(&self, source: &str, binds: &mut Vec<KeyBind>) -> LoadReport {
        let mut report = LoadReport::default();
        for directive in parse_source(source) {
            report.record(apply_to(binds, &self.resolver, directive));
        }
        report
    }

    /// Get the current binding for a key
    pub fn lookup(&self, key: &str) -> Option<&KeyBind> {
        self.binds.iter().find(|b| b.matches_key(key))
    }

    /// All bindings for an action, in table order
    pub fn keys_for_action(&self, action: &str) -> Vec<&KeyBind> {
        self.binds.iter().filter(|b| b.action() == action).collect()
    }

    /// Owned copy of the table in insertion order
    pub fn snapshot(&self) -> Vec<KeyBind> {
        self.binds.clone()
    }

    /// Borrowed view of the table in insertion order
    pub fn binds(&self) -> &[KeyBind] {
        &self.binds
    }

    pub fn len(&self) -> usize {
        self.binds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.binds.is_empty()
    }

    pub fn default_path(&self) -> Option<&Path> {
        self.default_path.as_deref()
    }

    pub fn user_path(&self) -> Option<&Path> {
        self.user_path.as_deref()
    }
}

fn read_source(path: &Path) -> Result<String, KeyBindError> {
    let bytes = std::fs::read(path).map_err(|source| {
        tracing::error!("Key bind file unavailable: {}: {}", path.display(), source);
        KeyBindError::SourceUnavailable {
            path: path.to_path_buf(),
            source,
        }
    })?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Unbind removes every binding for the key; a known descriptor replaces the
/// key's binding in place or appends a new one.
fn apply_to<R: NameResolver>(
    binds: &mut Vec<KeyBind>,
    resolver: &R,
    directive: Directive<'_>,
) -> DirectiveOutcome {
    if directive.is_unbind() {
        let before = binds.len();
        binds.retain(|b| !b.matches_key(directive.key));
        return DirectiveOutcome::Removed(before - binds.len());
    }

    let Some(action) = resolver.resolve(directive.descriptor) else {
        tracing::debug!(
            "Ignoring unknown descriptor {:?} for key {:?}",
            directive.descriptor,
            directive.key
        );
        return DirectiveOutcome::Unknown;
    };

    let bind = KeyBind::new(directive.key, action);
    if let Some(existing) = binds.iter_mut().find(|b| b.matches_key(directive.key)) {
        *existing = bind;
        DirectiveOutcome::Replaced
    } else {
        binds.push(bind);
        DirectiveOutcome::Inserted
    }
}

/// Errors surfaced by the repository
///
/// Malformed lines and unknown descriptors are never errors.
#[derive(Debug)]
pub enum KeyBindError {
    /// A key bind file could not be opened or read
    SourceUnavailable {
        path: PathBuf,
        source: std::io::Error,
    },
    /// `reload_binds` was called before any default source was recorded
    NotInitialized,
}

impl std::fmt::Display for KeyBindError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KeyBindError::SourceUnavailable { path, source } => {
                write!(f, "Key bind file unavailable: {}: {}", path.display(), source)
            }
            KeyBindError::NotInitialized => {
                write!(f, "Key bind repository was not initialized with defaults")
            }
        }
    }
}

impl std::error::Error for KeyBindError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            KeyBindError::SourceUnavailable { source, .. } => Some(source),
            KeyBindError::NotInitialized => None,
        }
    }
}
