//! Error types for the property bridge.
//!
//! Responsibilities:
//! - Define the diagnostic conditions the bridge can report.
//!
//! Does NOT handle:
//! - Recording diagnostics (see `context.rs`).
//! - Environment file loading errors (see `source/env.rs`).
//!
//! Invariants:
//! - All variants are advisory: they are rendered into the context's
//!   diagnostic channel and never abort the configuration parse.
//! - A key missing from the property source is NOT an error condition and
//!   has no variant here; absence of a property is a normal case.

use std::fmt;

/// Advisory conditions reported while handling a property tag.
// Display/Error are implemented by hand rather than derived with thiserror:
// the derive treats the spec-mandated `source` field as the error source,
// which does not type-check for a `String`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BridgeError {
    /// The `name` or `source` attribute of the tag was absent or empty.
    /// The invocation registers nothing.
    MissingRequiredAttribute,

    /// No property source was supplied when the action was constructed.
    /// The variable is still registered, with an absent value.
    ProviderUnavailable { source: String },
}

impl fmt::Display for BridgeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BridgeError::MissingRequiredAttribute => write!(
                f,
                "the \"name\" and \"source\" attributes of a property tag must be set"
            ),
            BridgeError::ProviderUnavailable { source } => {
                write!(f, "no property source available to resolve \"{source}\"")
            }
        }
    }
}

impl std::error::Error for BridgeError {}
