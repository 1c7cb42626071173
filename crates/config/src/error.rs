//! Error types for config data resolution and loading.
//!
//! Responsibilities:
//! - Define error variants for every resolution and loading failure.
//! - Carry the exact user-facing messages callers and tests assert on.
//!
//! Does NOT handle:
//! - Mapping errors to process exit codes (see the CLI crate).
//! - Retrying anything. Environment variables are not expected to flicker.
//!
//! Invariants:
//! - Not-found variants name the variable and, for resolution, the location.
//! - Parse and dotenv errors NEVER include raw content, only positions,
//!   since environment variables routinely carry credentials.

use std::io::ErrorKind;
use thiserror::Error;

use crate::location::ConfigDataLocation;

/// Errors that can occur while resolving or loading config data.
#[derive(Error, Debug)]
pub enum ConfigDataError {
    /// No registered loader supports the requested extension.
    ///
    /// This is a setup defect, not a user input problem.
    #[error("File extension '{extension}' is not known to any PropertySourceLoader")]
    UnknownExtension { extension: String },

    /// A required location points at an unset variable.
    #[error("{message}")]
    LocationNotFound {
        location: ConfigDataLocation,
        message: String,
    },

    /// The variable behind a resolved resource disappeared before loading.
    #[error("Config data resource '{resource}' cannot be found")]
    ResourceNotFound { resource: String },

    /// The content could not be parsed by the selected loader.
    #[error("Failed to parse config data from '{source_name}': {message}")]
    Parse {
        source_name: String,
        message: String,
    },

    /// The location does not use a scheme this resolver understands.
    #[error("Location '{location}' is not an env: location")]
    UnsupportedLocation { location: String },

    /// Failed to parse the `.env` file due to invalid syntax.
    ///
    /// SAFETY: This error only includes the byte index of the parse failure,
    /// NOT the offending line content, to prevent leaking secrets.
    #[error(
        "Failed to parse .env file at position {error_index}. Hint: set DOTENV_DISABLED=1 to skip .env loading"
    )]
    DotenvParse { error_index: usize },

    /// Failed to read the `.env` file due to an I/O error.
    #[error("Failed to read .env file: {kind}")]
    DotenvIo { kind: ErrorKind },

    /// Unknown dotenv error (future variants from dotenvy crate).
    #[error("Failed to load .env file. Hint: set DOTENV_DISABLED=1 to skip .env loading")]
    DotenvUnknown,
}

impl ConfigDataError {
    /// Build the error raised when a required variable is unset at resolution time.
    pub fn location_not_found(location: &ConfigDataLocation, variable_name: &str) -> Self {
        ConfigDataError::LocationNotFound {
            location: location.clone(),
            message: format!("Environment variable '{}' is not set", variable_name),
        }
    }

    /// Returns true for the two "nothing there" conditions.
    ///
    /// Callers can only recover from these by marking the location optional.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            ConfigDataError::LocationNotFound { .. } | ConfigDataError::ResourceNotFound { .. }
        )
    }

    /// The location attached to a resolution failure, if any.
    pub fn location(&self) -> Option<&ConfigDataLocation> {
        match self {
            ConfigDataError::LocationNotFound { location, .. } => Some(location),
            _ => None,
        }
    }
}
