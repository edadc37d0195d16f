//! Interpretation context: scoped variable bindings and diagnostics.
//!
//! Responsibilities:
//! - Hold `name → value` bindings partitioned by `Scope` for one parse pass.
//! - Collect the advisory diagnostics raised while tags are interpreted.
//!
//! Does NOT handle:
//! - Deciding what to register (see `action.rs`).
//! - Substituting variables into the rest of the logging configuration
//!   (done by the surrounding interpreter).
//!
//! Invariants:
//! - `set_property` writes unconditionally: an absent value still sets the
//!   binding and overwrites any prior binding of the same name.
//! - Lookup precedence is local > context > system.
//! - Diagnostics are advisory and ordered; recording one never fails the
//!   parse. Each is also emitted through `tracing` at its level.

use std::collections::HashMap;
use std::fmt;

use crate::scope::Scope;

/// Severity of an advisory diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticLevel {
    Warn,
    Error,
}

/// One advisory message raised during interpretation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub level: DiagnosticLevel,
    pub message: String,
}

/// Mutable state maintained across a single configuration-parse pass.
#[derive(Debug, Default)]
pub struct InterpretationContext {
    local: HashMap<String, Option<String>>,
    context: HashMap<String, Option<String>>,
    system: HashMap<String, Option<String>>,
    diagnostics: Vec<Diagnostic>,
}

impl InterpretationContext {
    pub fn new() -> Self {
        Self::default()
    }

    fn bindings_mut(&mut self, scope: Scope) -> &mut HashMap<String, Option<String>> {
        match scope {
            Scope::Local => &mut self.local,
            Scope::Context => &mut self.context,
            Scope::System => &mut self.system,
        }
    }

    /// Register `name → value` at `scope`, overwriting any existing binding
    /// of the same name there. An absent value still sets the binding.
    pub fn set_property(&mut self, name: &str, value: Option<String>, scope: Scope) {
        self.bindings_mut(scope).insert(name.to_string(), value);
    }

    /// Look up a binding by name, local scope first, then context, then
    /// system. The outer `None` means no binding exists; the inner
    /// `Option` is the bound value, which may itself be absent.
    pub fn property(&self, name: &str) -> Option<Option<&str>> {
        [&self.local, &self.context, &self.system]
            .into_iter()
            .find_map(|bindings| bindings.get(name))
            .map(|value| value.as_deref())
    }

    /// Record an error-level diagnostic.
    pub fn add_error(&mut self, message: impl fmt::Display) {
        let message = message.to_string();
        tracing::error!(target: "logbridge", "{message}");
        self.diagnostics.push(Diagnostic {
            level: DiagnosticLevel::Error,
            message,
        });
    }

    /// Record a warn-level diagnostic.
    pub fn add_warn(&mut self, message: impl fmt::Display) {
        let message = message.to_string();
        tracing::warn!(target: "logbridge", "{message}");
        self.diagnostics.push(Diagnostic {
            level: DiagnosticLevel::Warn,
            message,
        });
    }

    /// All diagnostics recorded so far, in order.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Whether any error-level diagnostic was recorded.
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.level == DiagnosticLevel::Error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_property_registers_binding_at_scope() {
        let mut ctx = InterpretationContext::new();
        ctx.set_property("db.url", Some("jdbc:test".to_string()), Scope::Context);
        assert_eq!(ctx.property("db.url"), Some(Some("jdbc:test")));
    }

    #[test]
    fn test_lookup_prefers_local_over_context_over_system() {
        let mut ctx = InterpretationContext::new();
        ctx.set_property("level", Some("system".to_string()), Scope::System);
        ctx.set_property("level", Some("context".to_string()), Scope::Context);
        assert_eq!(ctx.property("level"), Some(Some("context")));

        ctx.set_property("level", Some("local".to_string()), Scope::Local);
        assert_eq!(ctx.property("level"), Some(Some("local")));
    }

    #[test]
    fn test_absent_value_still_sets_and_overwrites_binding() {
        let mut ctx = InterpretationContext::new();
        ctx.set_property("key", Some("old".to_string()), Scope::Local);
        ctx.set_property("key", None, Scope::Local);
        // Binding exists but carries no value.
        assert_eq!(ctx.property("key"), Some(None));
    }

    #[test]
    fn test_unbound_name_returns_none() {
        let ctx = InterpretationContext::new();
        assert_eq!(ctx.property("missing"), None);
    }

    #[test]
    fn test_diagnostics_are_ordered_and_leveled() {
        let mut ctx = InterpretationContext::new();
        ctx.add_warn("first");
        ctx.add_error("second");
        let diags = ctx.diagnostics();
        assert_eq!(diags.len(), 2);
        assert_eq!(diags[0].level, DiagnosticLevel::Warn);
        assert_eq!(diags[0].message, "first");
        assert_eq!(diags[1].level, DiagnosticLevel::Error);
        assert!(ctx.has_errors());
    }
}
