//! Property sources: where bridged values come from.
//!
//! Responsibilities:
//! - Define the `PropertySource` lookup contract consumed by the bridge.
//! - Provide the in-tree implementations for the usual layers: in-memory
//!   maps (config files, overrides), process environment variables, and an
//!   ordered combination of both.
//!
//! Does NOT handle:
//! - Relaxed key matching (see `relaxed.rs`; sources only answer exact
//!   lookups for the key spelling they are given).
//! - Registering resolved values anywhere (see `action.rs`).
//!
//! Invariants:
//! - `get_property` is synchronous and in-memory; a miss is `None`, never
//!   an error.

mod env;
mod layered;
mod map;

pub use env::{EnvFileError, EnvSource};
pub use layered::LayeredSource;
pub use map::MapSource;

/// Hierarchical key-value lookup by dotted string key.
///
/// The bridge queries this once (or twice, via relaxed matching) per tag
/// invocation. Implementations answer for the exact key they are handed;
/// naming-convention tolerance lives in `RelaxedResolver`, not here.
pub trait PropertySource {
    /// Exact lookup. `None` means the key is not known to this source.
    fn get_property(&self, key: &str) -> Option<String>;
}
