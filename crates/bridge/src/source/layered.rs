//! Ordered combination of property sources.
//!
//! Responsibilities:
//! - Query a list of sources in precedence order; first hit wins.
//!
//! Invariants:
//! - Sources earlier in the list shadow later ones (e.g. overrides >
//!   environment variables > config file).
//! - A miss in every layer is `None`, never an error.

use super::PropertySource;

/// Layered lookup across multiple property sources.
#[derive(Default)]
pub struct LayeredSource {
    layers: Vec<Box<dyn PropertySource>>,
}

impl LayeredSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a layer with lower precedence than everything added so far.
    pub fn with(mut self, layer: impl PropertySource + 'static) -> Self {
        self.layers.push(Box::new(layer));
        self
    }
}

impl PropertySource for LayeredSource {
    fn get_property(&self, key: &str) -> Option<String> {
        self.layers.iter().find_map(|layer| layer.get_property(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::MapSource;

    #[test]
    fn test_earlier_layers_shadow_later_ones() {
        let overrides = MapSource::from_iter([("server.port", "9090")]);
        let file = MapSource::from_iter([("server.port", "8080"), ("server.host", "localhost")]);
        let layered = LayeredSource::new().with(overrides).with(file);

        assert_eq!(layered.get_property("server.port"), Some("9090".to_string()));
        assert_eq!(
            layered.get_property("server.host"),
            Some("localhost".to_string())
        );
    }

    #[test]
    fn test_miss_in_every_layer_is_none() {
        let layered = LayeredSource::new().with(MapSource::new());
        assert_eq!(layered.get_property("absent"), None);
    }
}
