//! Parsed config data locations.
//!
//! Responsibilities:
//! - Hold a location value together with its `optional` flag.
//! - Parse the upstream `optional:` marker and `;`-delimited location lists.
//! - Answer scheme prefix questions for resolvers.
//!
//! Does NOT handle:
//! - Interpreting the scheme payload (see `resolver.rs`).
//!
//! Invariants:
//! - A location value is never blank.
//! - The value never starts with the `optional:` marker; it lives in the flag.

use std::fmt;

use crate::constants::{LOCATION_DELIMITER, OPTIONAL_PREFIX};

/// A location that config data can be resolved from, e.g. `env:APP_CONFIG[.yaml]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConfigDataLocation {
    value: String,
    optional: bool,
}

impl ConfigDataLocation {
    /// Parse a location string, honouring a leading `optional:` marker.
    ///
    /// Returns `None` for blank input, including a bare `optional:` marker.
    pub fn of(location: &str) -> Option<Self> {
        let (value, optional) = match location.strip_prefix(OPTIONAL_PREFIX) {
            Some(rest) => (rest, true),
            None => (location, false),
        };
        if value.trim().is_empty() {
            return None;
        }
        Some(Self {
            value: value.to_string(),
            optional,
        })
    }

    /// Build a location directly from its parts.
    pub fn new(value: impl Into<String>, optional: bool) -> Self {
        Self {
            value: value.into(),
            optional,
        }
    }

    /// The location value without the `optional:` marker.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Whether the absence of this location is tolerated.
    pub fn is_optional(&self) -> bool {
        self.optional
    }

    pub fn has_prefix(&self, prefix: &str) -> bool {
        self.value.starts_with(prefix)
    }

    /// The value with `prefix` removed, or the whole value if it lacks the prefix.
    pub fn non_prefixed_value(&self, prefix: &str) -> &str {
        self.value.strip_prefix(prefix).unwrap_or(&self.value)
    }

    /// Split a `;`-delimited location into its parts.
    ///
    /// Each segment is parsed on its own, so only segments carrying their own
    /// `optional:` marker are optional. Blank segments are dropped.
    pub fn split(&self) -> Vec<ConfigDataLocation> {
        self.to_string()
            .split(LOCATION_DELIMITER)
            .filter_map(ConfigDataLocation::of)
            .collect()
    }
}

impl fmt::Display for ConfigDataLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.optional {
            write!(f, "{}{}", OPTIONAL_PREFIX, self.value)
        } else {
            f.write_str(&self.value)
        }
    }
}
