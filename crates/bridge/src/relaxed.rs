//! Relaxed key matching for property lookup.
//!
//! Responsibilities:
//! - Generate alternate lexical renderings of a key segment (case and
//!   separator variations).
//! - Provide `RelaxedResolver`, a prefix-scoped lookup over a
//!   `PropertySource` that tolerates naming-convention differences between
//!   the requested dotted key and the source's stored keys.
//!
//! Does NOT handle:
//! - The exact-match-first rule (see `action.rs`; the resolver is only
//!   consulted after an exact lookup misses).
//!
//! Invariants:
//! - Variant generation always yields the original spelling first, so an
//!   exact-convention key wins over any relaxed rendering.
//! - Candidate keys are deduplicated; each distinct key is queried at most
//!   once per lookup.

use std::collections::HashSet;

use crate::source::PropertySource;

/// Rewrite camelCase humps as `sep`-separated lowercase segments.
fn camel_to_separated(name: &str, sep: char) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for c in name.chars() {
        if c.is_ascii_uppercase() {
            if out.chars().last().is_some_and(|p| p.is_ascii_alphanumeric()) {
                out.push(sep);
            }
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// Rewrite `-`/`_`-separated segments as camelCase.
fn separated_to_camel(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut upper_next = false;
    for c in name.chars() {
        if c == '-' || c == '_' {
            upper_next = true;
        } else if upper_next {
            out.push(c.to_ascii_uppercase());
            upper_next = false;
        } else {
            out.push(c);
        }
    }
    out
}

fn push_unique(out: &mut Vec<String>, candidate: String) {
    if !out.contains(&candidate) {
        out.push(candidate);
    }
}

/// Alternate renderings of a key segment, original spelling first.
///
/// Separator manipulations (`-`/`_`/`.` swaps, camelCase conversion) are
/// crossed with case variations (as-is, lowercase, uppercase).
pub(crate) fn name_variants(name: &str) -> Vec<String> {
    let mut manipulated = vec![name.to_string()];
    for candidate in [
        name.replace('-', "_"),
        name.replace('_', "-"),
        name.replace('.', "_"),
        name.replace('.', "-"),
        camel_to_separated(name, '-'),
        camel_to_separated(name, '_'),
        separated_to_camel(name),
    ] {
        push_unique(&mut manipulated, candidate);
    }

    let mut out = Vec::new();
    for m in manipulated {
        let lower = m.to_ascii_lowercase();
        let upper = m.to_ascii_uppercase();
        push_unique(&mut out, m);
        push_unique(&mut out, lower);
        push_unique(&mut out, upper);
    }
    out
}

/// Prefix-scoped lookup with relaxed key matching.
///
/// Wraps a `PropertySource` together with a dotted key prefix (inclusive of
/// the trailing dot). `get_property` then looks up a suffix by trying
/// renderings of `prefix + separator + suffix` until one yields a value.
pub struct RelaxedResolver<'a> {
    source: &'a dyn PropertySource,
    prefix: &'a str,
}

impl<'a> RelaxedResolver<'a> {
    pub fn new(source: &'a dyn PropertySource, prefix: &'a str) -> Self {
        Self { source, prefix }
    }

    /// Resolve `key` under the configured prefix, or `None` if no rendering
    /// of the combined key is present in the source.
    pub fn get_property(&self, key: &str) -> Option<String> {
        let stem = self.prefix.strip_suffix('.').unwrap_or(self.prefix);
        let mut seen = HashSet::new();
        for stem_variant in name_variants(stem) {
            for separator in ['.', '-', '_'] {
                for key_variant in name_variants(key) {
                    let candidate = format!("{stem_variant}{separator}{key_variant}");
                    if seen.insert(candidate.clone())
                        && let Some(value) = self.source.get_property(&candidate)
                    {
                        return Some(value);
                    }
                }
            }
        }
        None
    }
}
