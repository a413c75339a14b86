//! Environment snapshot and required-variable validation.
//!
//! # Responsibilities
//! - Capture the process environment once at startup
//! - Look variables up by name (presence semantics: empty values count as set)
//! - Fail with `MissingVariable` for required names
//!
//! # Design Decisions
//! - The snapshot is an explicit value, so builders never touch the real
//!   process environment and tests stay deterministic
//! - Values are kept as `OsString`: a non-UTF-8 path is still a set variable
//! - Unknown variables are carried along and ignored, never validated

use std::collections::HashMap;
use std::ffi::{OsStr, OsString};

use crate::error::LaunchError;

/// HTTP port for both the proxy and the fallback server.
pub const PORT: &str = "PORT";
/// Path to a local service configuration file.
pub const ENDPOINTS_SERVICE_PATH: &str = "ENDPOINTS_SERVICE_PATH";
/// Service name, required when no service path is given.
pub const ENDPOINTS_SERVICE_NAME: &str = "ENDPOINTS_SERVICE_NAME";
/// Optional pinned service configuration version.
pub const ENDPOINTS_SERVICE_VERSION: &str = "ENDPOINTS_SERVICE_VERSION";
/// Free-form extra proxy arguments.
pub const ESPV2_ARGS: &str = "ESPv2_ARGS";

/// Immutable snapshot of environment variables.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Environment {
    vars: HashMap<String, OsString>,
}

impl Environment {
    /// Snapshot the current process environment.
    ///
    /// Variables whose name is not valid Unicode are skipped; none of them
    /// can match a name the launcher looks up. Values are kept as-is.
    pub fn from_process() -> Self {
        std::env::vars_os()
            .filter_map(|(k, v)| Some((k.into_string().ok()?, v)))
            .collect()
    }

    /// Look up an optional variable.
    pub fn get(&self, name: &str) -> Option<&OsStr> {
        self.vars.get(name).map(OsString::as_os_str)
    }

    /// Look up a required variable.
    pub fn require(&self, name: &str) -> Result<&OsStr, LaunchError> {
        self.get(name)
            .ok_or_else(|| LaunchError::MissingVariable(name.to_string()))
    }
}

impl<K, V> FromIterator<(K, V)> for Environment
where
    K: Into<String>,
    V: Into<OsString>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_present() {
        let env: Environment = [(PORT, "8080")].into_iter().collect();
        assert_eq!(env.require(PORT).unwrap(), "8080");
    }

    #[test]
    fn test_require_missing() {
        let env = Environment::default();
        match env.require(ENDPOINTS_SERVICE_NAME) {
            Err(LaunchError::MissingVariable(name)) => assert_eq!(name, ENDPOINTS_SERVICE_NAME),
            other => panic!("expected MissingVariable, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_value_counts_as_set() {
        let env: Environment = [(ENDPOINTS_SERVICE_VERSION, "")].into_iter().collect();
        assert_eq!(env.get(ENDPOINTS_SERVICE_VERSION), Some(OsStr::new("")));
        assert_eq!(env.require(ENDPOINTS_SERVICE_VERSION).unwrap(), "");
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_value_counts_as_set() {
        use std::os::unix::ffi::OsStrExt;

        let path = OsStr::from_bytes(b"/etc/svc-\xff.json");
        let env: Environment = [(ENDPOINTS_SERVICE_PATH, path)].into_iter().collect();
        assert_eq!(env.require(ENDPOINTS_SERVICE_PATH).unwrap(), path);
    }
}
