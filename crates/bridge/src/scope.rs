//! Variable scope for registered properties.
//!
//! Responsibilities:
//! - Define the fixed set of scopes a property binding can live in.
//! - Parse the optional `scope` tag attribute leniently.
//!
//! Does NOT handle:
//! - Scope precedence during lookup (see `context.rs`).
//!
//! Invariants:
//! - Parsing never fails: absent, empty, or unrecognized input falls back
//!   to `Scope::Local`.
//! - Matching is case-insensitive and ignores surrounding whitespace.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifetime tier for a variable registered in the interpretation context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scope {
    /// Visible for the current parse pass only.
    #[default]
    Local,
    /// Visible for the lifetime of the logging context.
    Context,
    /// Visible process-wide.
    System,
}

impl Scope {
    /// Parse the `scope` attribute of a tag invocation.
    ///
    /// Recognized values are `local`, `context`, and `system`
    /// (case-insensitive). Anything else, including an absent attribute,
    /// resolves to [`Scope::Local`].
    pub fn from_attribute(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some(s) if s.eq_ignore_ascii_case("context") => Self::Context,
            Some(s) if s.eq_ignore_ascii_case("system") => Self::System,
            Some(s) if s.eq_ignore_ascii_case("local") => Self::Local,
            _ => Self::Local,
        }
    }

    /// Lowercase name as it appears in configuration files.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Local => "local",
            Self::Context => "context",
            Self::System => "system",
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
