//! Property-based tests for key resolution.
//!
//! These tests use randomly generated dotted keys to check the lookup
//! invariants that unit tests only spot-check:
//! - An exactly stored key always resolves to its stored value.
//! - Relaxed matching bridges case and separator variations of the last
//!   key segment.
//! - Scope parsing never panics and always yields a member of the fixed
//!   enumeration.

use proptest::prelude::*;
use std::sync::Arc;

use logbridge::{
    InterpretationContext, MapSource, PropertyBridgeAction, Scope, TagAction, TagAttributes,
};

/// Strategy for generating dotted property keys with 2-4 lowercase
/// segments, e.g. `spring.datasource.url`.
fn dotted_key_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec("[a-z][a-z0-9]{0,7}", 2..=4).prop_map(|segments| segments.join("."))
}

/// Strategy for generating stored property values.
fn value_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9:/_\\-]{1,32}".prop_map(String::from)
}

proptest! {
    #[test]
    fn exact_key_always_resolves(key in dotted_key_strategy(), value in value_strategy()) {
        let provider = MapSource::from_iter([(key.clone(), value.clone())]);
        let action = PropertyBridgeAction::new(Some(Arc::new(provider)));
        let mut ctx = InterpretationContext::new();

        action.on_begin(
            &mut ctx,
            &TagAttributes::new().with_name("var").with_source(key),
        );

        prop_assert_eq!(ctx.property("var"), Some(Some(value.as_str())));
        prop_assert!(ctx.diagnostics().is_empty());
    }

    #[test]
    fn relaxed_lookup_bridges_uppercased_suffix(
        key in dotted_key_strategy(),
        value in value_strategy(),
    ) {
        // Store the key with its last segment uppercased; ask for the
        // lowercase spelling.
        let last_dot = key.rfind('.').unwrap();
        let stored = format!(
            "{}{}",
            &key[..last_dot + 1],
            key[last_dot + 1..].to_ascii_uppercase()
        );
        let provider = MapSource::from_iter([(stored, value.clone())]);
        let action = PropertyBridgeAction::new(Some(Arc::new(provider)));
        let mut ctx = InterpretationContext::new();

        action.on_begin(
            &mut ctx,
            &TagAttributes::new().with_name("var").with_source(key),
        );

        prop_assert_eq!(ctx.property("var"), Some(Some(value.as_str())));
    }

    #[test]
    fn scope_parsing_is_total(raw in ".{0,16}") {
        let scope = Scope::from_attribute(Some(&raw));
        prop_assert!(matches!(scope, Scope::Local | Scope::Context | Scope::System));
    }
}
