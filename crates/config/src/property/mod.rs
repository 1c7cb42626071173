//! Property sources and the loaders that produce them.
//!
//! Responsibilities:
//! - Define `PropertySource`, the ordered key/value result of parsing content.
//! - Define the `PropertySourceLoader` capability and the loader registry.
//! - Provide the built-in properties, YAML, and JSON loaders.
//!
//! Does NOT handle:
//! - Reading content from anywhere (loaders receive raw text).
//! - Merging several property sources.

mod flatten;
mod json;
mod loaders;
mod properties;
mod yaml;

pub use json::JsonPropertySourceLoader;
pub use loaders::{PropertySourceLoader, PropertySourceLoaders};
pub use properties::PropertiesPropertySourceLoader;
pub use yaml::YamlPropertySourceLoader;

use indexmap::IndexMap;
use serde::{Serialize, Serializer};

/// A named, insertion-ordered set of configuration properties.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertySource {
    name: String,
    entries: IndexMap<String, String>,
}

impl PropertySource {
    /// Create an empty property source.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: IndexMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Insert a property, replacing an existing value in place.
    ///
    /// Replacement keeps the position of the first occurrence.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Property names in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Properties in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// Serialized as the bare property map; the name is not part of the output.
impl Serialize for PropertySource {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.entries.serialize(serializer)
    }
}
