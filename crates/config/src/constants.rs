//! Centralized constants for `env:` config data handling.
//!
//! This module contains the location syntax markers and defaults shared
//! by the resolver, the loader, and the CLI.

// =============================================================================
// Location Syntax
// =============================================================================

/// Scheme prefix handled by the environment variable resolver.
pub const ENV_PREFIX: &str = "env:";

/// Marker for locations whose absence is tolerated.
pub const OPTIONAL_PREFIX: &str = "optional:";

/// Delimiter for multiple locations packed in a single value.
pub const LOCATION_DELIMITER: char = ';';

// =============================================================================
// Loader Selection
// =============================================================================

/// Extension used when a location carries no `[.ext]` hint.
///
/// Environment variable content defaults to plain `key=value` lines.
pub const DEFAULT_EXTENSION: &str = ".properties";

// =============================================================================
// Dotenv
// =============================================================================

/// Setting this variable to `1` or `true` skips `.env` loading.
pub const DOTENV_DISABLED_VAR: &str = "DOTENV_DISABLED";
