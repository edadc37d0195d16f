//! The property bridge tag action.
//!
//! Responsibilities:
//! - Implement the tag contract: on tag start, validate attributes, resolve
//!   the `source` key against the configured property source, and register
//!   the result in the interpretation context at the requested scope.
//! - Apply the two-tier lookup: exact match first, then a prefix-scoped
//!   relaxed match on the last dotted segment.
//!
//! Does NOT handle:
//! - Parsing the logging-configuration file (the surrounding interpreter
//!   drives `TagAction` implementations).
//! - Substituting registered variables later in the parse.
//!
//! Invariants:
//! - The action is constructed once and reused across tag invocations; it
//!   holds no per-invocation state.
//! - Every failure path is an advisory diagnostic; nothing aborts the
//!   parse.
//! - Registration happens even when the resolved value is absent, except
//!   when a required attribute is missing (then nothing is registered).

use std::sync::Arc;

use crate::context::InterpretationContext;
use crate::error::BridgeError;
use crate::relaxed::RelaxedResolver;
use crate::scope::Scope;
use crate::source::PropertySource;

/// Attributes of one tag occurrence, read once and discarded.
#[derive(Debug, Clone, Default)]
pub struct TagAttributes {
    pub name: Option<String>,
    pub source: Option<String>,
    pub scope: Option<String>,
}

impl TagAttributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn with_scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = Some(scope.into());
        self
    }
}

/// Contract between the configuration interpreter and a tag handler.
///
/// The interpreter calls `on_begin` when it encounters the opening tag and
/// `on_end` when the tag closes.
pub trait TagAction {
    fn on_begin(&self, ctx: &mut InterpretationContext, attrs: &TagAttributes);
    fn on_end(&self, ctx: &mut InterpretationContext);
}

/// Treat absent, empty, and whitespace-only attribute values as unset.
fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}

/// Tag action that bridges a property out of the application's layered
/// configuration into a named logging-configuration variable.
///
/// Constructed once, with an optional property source, and reused for
/// every tag occurrence within one configuration-parse pass.
pub struct PropertyBridgeAction {
    provider: Option<Arc<dyn PropertySource>>,
}

impl PropertyBridgeAction {
    /// Create the action. A `None` provider is tolerated: lookups then
    /// degrade to "unavailable" warnings and absent values.
    pub fn new(provider: Option<Arc<dyn PropertySource>>) -> Self {
        Self { provider }
    }

    /// Resolve `source` against the provider.
    ///
    /// Exact lookup first; on a miss, the key is split at its last dot and
    /// the suffix is retried with relaxed matching scoped to the prefix.
    /// Absence under both tiers is a normal case and reports nothing.
    fn resolve(&self, ctx: &mut InterpretationContext, source: &str) -> Option<String> {
        let Some(provider) = &self.provider else {
            ctx.add_warn(BridgeError::ProviderUnavailable {
                source: source.to_string(),
            });
            return None;
        };
        if let Some(value) = provider.get_property(source) {
            return Some(value);
        }
        match source.rfind('.') {
            Some(last_dot) if last_dot > 0 => {
                let (prefix, suffix) = source.split_at(last_dot + 1);
                RelaxedResolver::new(provider.as_ref(), prefix).get_property(suffix)
            }
            _ => None,
        }
    }
}

impl TagAction for PropertyBridgeAction {
    fn on_begin(&self, ctx: &mut InterpretationContext, attrs: &TagAttributes) {
        let name = non_empty(attrs.name.as_deref());
        let source = non_empty(attrs.source.as_deref());
        let (Some(name), Some(source)) = (name, source) else {
            ctx.add_error(BridgeError::MissingRequiredAttribute);
            return;
        };
        let scope = Scope::from_attribute(attrs.scope.as_deref());
        let value = self.resolve(ctx, source);
        ctx.set_property(name, value, scope);
    }

    fn on_end(&self, _ctx: &mut InterpretationContext) {}
}
