//! Bridge application configuration properties into logging configuration.
//!
//! This crate provides the `<springProperty>`-style tag action that lets a
//! logging-configuration file pull a value out of a layered configuration
//! system (environment variables, config files, overrides) and register it
//! as a named variable in the interpreter's context, before logging is
//! fully initialized.
//!
//! The interpreter that parses the logging configuration is not part of
//! this crate; it drives [`TagAction`] implementations and later
//! substitutes registered variables on its own.

pub mod action;
pub mod context;
pub mod relaxed;
pub mod scope;
pub mod source;

mod error;

pub use action::{PropertyBridgeAction, TagAction, TagAttributes};
pub use context::{Diagnostic, DiagnosticLevel, InterpretationContext};
pub use error::BridgeError;
pub use relaxed::RelaxedResolver;
pub use scope::Scope;
pub use source::{EnvSource, LayeredSource, MapSource, PropertySource};
