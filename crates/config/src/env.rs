//! Environment variable access for config data resolution.
//!
//! Responsibilities:
//! - Define the injectable name→value lookup used by the resolver and loader.
//! - Provide the process-environment lookup and a fixed-snapshot lookup.
//! - Load `.env` files on request, gated by `DOTENV_DISABLED`.
//!
//! Does NOT handle:
//! - Parsing variable content (see `property`).
//! - Enumerating variables.
//!
//! Invariants:
//! - Presence is the only signal: an empty value is still present.
//! - Values are returned untouched (no trimming).
//! - The `DOTENV_DISABLED` variable is checked before `dotenvy::dotenv()` is called.

use std::collections::HashMap;
use std::sync::Arc;

use crate::constants::DOTENV_DISABLED_VAR;
use crate::error::ConfigDataError;

/// Looks up an environment variable by name.
///
/// Swappable so tests can substitute a fixed map for the process environment.
pub type EnvLookup = Arc<dyn Fn(&str) -> Option<String> + Send + Sync>;

/// Read a variable from the live process environment.
///
/// Non-UTF-8 values are converted lossily rather than treated as unset.
pub fn system_env(name: &str) -> Option<String> {
    if name.is_empty() || name.contains(['=', '\0']) {
        // Names the platform environment cannot hold are never set.
        return None;
    }
    std::env::var_os(name).map(|value| value.to_string_lossy().into_owned())
}

/// Lookup backed by the live process environment.
pub fn system_lookup() -> EnvLookup {
    Arc::new(system_env)
}

/// Lookup backed by a fixed set of variables.
pub fn snapshot_lookup<K, V>(vars: impl IntoIterator<Item = (K, V)>) -> EnvLookup
where
    K: Into<String>,
    V: Into<String>,
{
    let vars: HashMap<String, String> = vars
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect();
    Arc::new(move |name: &str| vars.get(name).cloned())
}

/// Check if dotenv loading is disabled via environment variable.
fn dotenv_disabled() -> bool {
    matches!(
        std::env::var(DOTENV_DISABLED_VAR).ok().as_deref(),
        Some("true") | Some("1")
    )
}

/// Check if a dotenv error indicates the file was not found.
fn is_not_found(err: &dotenvy::Error) -> bool {
    matches!(
        err,
        dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
    )
}

/// Load environment variables from a `.env` file if present.
///
/// If `DOTENV_DISABLED` is set to "true" or "1", nothing is loaded.
/// Variables already set in the process are not overridden.
///
/// # Errors
///
/// Returns an error if:
/// - The `.env` file exists but has invalid syntax (`ConfigDataError::DotenvParse`)
/// - The `.env` file exists but cannot be read (`ConfigDataError::DotenvIo`)
///
/// Missing `.env` files are silently ignored.
///
/// SAFETY: Error messages never include raw .env line contents to prevent secret leakage.
pub fn load_dotenv() -> Result<(), ConfigDataError> {
    if dotenv_disabled() {
        tracing::debug!("dotenv loading disabled");
        return Ok(());
    }

    match dotenvy::dotenv() {
        Ok(path) => {
            tracing::debug!(path = %path.display(), "loaded .env file");
            Ok(())
        }
        Err(e) if is_not_found(&e) => Ok(()),
        Err(dotenvy::Error::LineParse(_, idx)) => {
            Err(ConfigDataError::DotenvParse { error_index: idx })
        }
        Err(dotenvy::Error::Io(io_err)) => Err(ConfigDataError::DotenvIo {
            kind: io_err.kind(),
        }),
        Err(_) => Err(ConfigDataError::DotenvUnknown),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_snapshot_lookup() {
        let lookup = snapshot_lookup([("VAR1", "key1=value1"), ("EMPTY", "")]);
        assert_eq!(lookup("VAR1").as_deref(), Some("key1=value1"));
        assert_eq!(lookup("EMPTY").as_deref(), Some(""));
        assert_eq!(lookup("MISSING"), None);
    }

    #[test]
    #[serial]
    fn test_system_env_presence_is_the_signal() {
        let key = "_ENVDATA_TEST_SYSTEM_ENV";
        assert!(system_env(key).is_none(), "Unset env var should return None");

        temp_env::with_vars([(key, Some(""))], || {
            assert_eq!(system_env(key).as_deref(), Some(""));
        });

        temp_env::with_vars([(key, Some("  padded  "))], || {
            assert_eq!(system_env(key).as_deref(), Some("  padded  "));
        });
    }

    #[test]
    fn test_system_env_invalid_names_are_unset() {
        assert!(system_env("").is_none());
        assert!(system_env("A=B").is_none());
        assert!(system_env("A\0B").is_none());
    }
}
