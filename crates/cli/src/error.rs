//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Map `ConfigDataError` variants to appropriate exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//!
//! Invariants:
//! - Nothing is retryable: a missing variable stays missing until the
//!   environment changes.

use envdata_config::ConfigDataError;

/// Structured exit codes for envdata.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - command completed successfully.
    Success = 0,

    /// General error - unhandled or generic failure.
    GeneralError = 1,

    /// A required location or a resolved resource was not found.
    ///
    /// Scripts should set the variable or mark the location `optional:`.
    NotFound = 4,

    /// Invalid configuration - unknown extension, unparsable content,
    /// or a location this tool cannot resolve.
    ///
    /// Scripts should fix the input and not retry.
    ValidationError = 5,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&ConfigDataError> for ExitCode {
    fn from(err: &ConfigDataError) -> Self {
        match err {
            ConfigDataError::LocationNotFound { .. } | ConfigDataError::ResourceNotFound { .. } => {
                ExitCode::NotFound
            }
            ConfigDataError::UnknownExtension { .. }
            | ConfigDataError::Parse { .. }
            | ConfigDataError::UnsupportedLocation { .. } => ExitCode::ValidationError,
            ConfigDataError::DotenvParse { .. }
            | ConfigDataError::DotenvIo { .. }
            | ConfigDataError::DotenvUnknown => ExitCode::GeneralError,
        }
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Extract the appropriate exit code from this error.
    ///
    /// Returns ExitCode::GeneralError if no ConfigDataError is in the chain.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        self.chain()
            .find_map(|cause| cause.downcast_ref::<ConfigDataError>())
            .map(ExitCode::from)
            .unwrap_or(ExitCode::GeneralError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    #[test]
    fn test_exit_code_as_i32() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::GeneralError.as_i32(), 1);
        assert_eq!(ExitCode::NotFound.as_i32(), 4);
        assert_eq!(ExitCode::ValidationError.as_i32(), 5);
    }

    #[test]
    fn test_not_found_errors() {
        let err = ConfigDataError::ResourceNotFound {
            resource: "env variable [VAR1]".to_string(),
        };
        assert_eq!(ExitCode::from(&err), ExitCode::NotFound);
    }

    #[test]
    fn test_validation_errors() {
        let err = ConfigDataError::UnknownExtension {
            extension: "toml".to_string(),
        };
        assert_eq!(ExitCode::from(&err), ExitCode::ValidationError);
    }

    #[test]
    fn test_exit_code_from_wrapped_error() {
        let result: Result<(), ConfigDataError> = Err(ConfigDataError::ResourceNotFound {
            resource: "env variable [VAR1]".to_string(),
        });
        let err = result.context("Failed to load 'env:VAR1'").unwrap_err();
        assert_eq!(err.exit_code(), ExitCode::NotFound);
    }

    #[test]
    fn test_exit_code_defaults_to_general_error() {
        let err = anyhow::anyhow!("something else");
        assert_eq!(err.exit_code(), ExitCode::GeneralError);
    }
}
