//! Environment-variable property source.
//!
//! Responsibilities:
//! - Resolve dotted keys against process environment variables by naming
//!   convention (`spring.datasource.url` → `SPRING_DATASOURCE_URL`).
//! - Optionally load a `.env` file into the process environment first.
//!
//! Does NOT handle:
//! - Relaxed key matching (the convention mapping here is deterministic;
//!   see `relaxed.rs` for fuzzy lookup).
//!
//! Invariants:
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed (leading/trailing whitespace removed).
//! - `load_dotenv` is explicit and gated by `DOTENV_DISABLED`; a missing
//!   `.env` file is not an error.
//! - Dotenv errors NEVER include raw .env line contents to prevent secret
//!   leakage.

use std::io::ErrorKind;

use thiserror::Error;

use super::PropertySource;

/// Errors from loading a `.env` file.
#[derive(Error, Debug)]
pub enum EnvFileError {
    /// Failed to parse the `.env` file due to invalid syntax.
    ///
    /// SAFETY: only the byte index of the parse failure is reported, NOT
    /// the offending line content.
    #[error(
        "Failed to parse .env file at position {error_index}. Hint: set DOTENV_DISABLED=1 to skip .env loading"
    )]
    Parse { error_index: usize },

    /// Failed to read the `.env` file due to an I/O error.
    #[error("Failed to read .env file: {kind}")]
    Io { kind: ErrorKind },

    /// Unknown dotenv error (future variants from dotenvy crate).
    #[error("Failed to load .env file. Hint: set DOTENV_DISABLED=1 to skip .env loading")]
    Unknown,
}

/// Property source backed by the process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvSource;

impl EnvSource {
    pub fn new() -> Self {
        Self
    }

    /// Check if dotenv loading is disabled via environment variable.
    fn dotenv_disabled() -> bool {
        matches!(
            std::env::var("DOTENV_DISABLED").ok().as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Check if a dotenv error indicates the file was not found.
    fn is_not_found(err: &dotenvy::Error) -> bool {
        matches!(
            err,
            dotenvy::Error::Io(io_err) if io_err.kind() == ErrorKind::NotFound
        )
    }

    /// Load environment variables from a `.env` file if present.
    ///
    /// If the `DOTENV_DISABLED` environment variable is set to "true" or
    /// "1", the `.env` file will not be loaded (useful for testing).
    /// Missing `.env` files are silently ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if the `.env` file exists but has invalid syntax
    /// (`EnvFileError::Parse`) or cannot be read (`EnvFileError::Io`).
    pub fn load_dotenv(self) -> Result<Self, EnvFileError> {
        if Self::dotenv_disabled() {
            return Ok(self);
        }

        match dotenvy::dotenv() {
            Ok(_) => Ok(self),
            Err(e) if Self::is_not_found(&e) => Ok(self),
            Err(dotenvy::Error::LineParse(_, idx)) => Err(EnvFileError::Parse { error_index: idx }),
            Err(dotenvy::Error::Io(io_err)) => Err(EnvFileError::Io {
                kind: io_err.kind(),
            }),
            Err(_) => Err(EnvFileError::Unknown),
        }
    }

    /// Environment variable name for a dotted property key: uppercase,
    /// with every non-alphanumeric character rewritten to `_`.
    pub fn variable_name(key: &str) -> String {
        key.chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() {
                    c.to_ascii_uppercase()
                } else {
                    '_'
                }
            })
            .collect()
    }
}

/// Read an environment variable, returning None if unset, empty, or
/// whitespace-only. Returns the trimmed value if present.
fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            // No trimming needed, return original to avoid allocation
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

impl PropertySource for EnvSource {
    fn get_property(&self, key: &str) -> Option<String> {
        env_var_or_none(&Self::variable_name(key))
    }
}
