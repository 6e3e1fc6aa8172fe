//! Line parser for quoted-token key-bind files
//!
//! Parses lines like `bind "w" "+forward"` into `(key, descriptor)` directives.
//! Anything that does not look like a binding is skipped, never reported.

/// Descriptor that removes any existing binding for its key
pub const UNBOUND: &str = "<unbound>";

const COMMENT_PREFIX: &str = "//";
const QUOTE: char = '"';

/// A `(key, descriptor)` pair extracted from one source line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Directive<'a> {
    pub key: &'a str,
    pub descriptor: &'a str,
}

impl<'a> Directive<'a> {
    pub fn new(key: &'a str, descriptor: &'a str) -> Self {
        Self { key, descriptor }
    }

    /// Check if this directive removes the key's binding
    pub fn is_unbind(&self) -> bool {
        self.descriptor == UNBOUND
    }
}

/// Parse a single line into a directive
///
/// The key is the 2nd and the descriptor the 4th token when the line is
/// split on `"`. Trailing empty tokens are discarded before counting, so a
/// line whose 4th token would be the empty tail (`bind "w" ""`) is ignored.
pub fn parse_line(line: &str) -> Option<Directive<'_>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with(COMMENT_PREFIX) || !line.contains(QUOTE) {
        return None;
    }

    let mut tokens: Vec<&str> = line.split(QUOTE).collect();
    while tokens.last().is_some_and(|t| t.is_empty()) {
        tokens.pop();
    }

    if tokens.len() < 4 {
        return None;
    }

    Some(Directive::new(tokens[1], tokens[3]))
}

/// Parse every line of a source in order, yielding only the lines that
/// produce a directive
pub fn parse_source(source: &str) -> impl Iterator<Item = Directive<'_>> {
    source.lines().filter_map(parse_line)
}
