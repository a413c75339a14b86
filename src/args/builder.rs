//! Builds the proxy command line from the environment snapshot.

use std::ffi::{OsStr, OsString};

use crate::args::extra::MALFORMED_ARGS_MESSAGE;
use crate::args::{parse_extra_args, CommandLine};
use crate::config::env::{
    Environment, ENDPOINTS_SERVICE_NAME, ENDPOINTS_SERVICE_PATH, ENDPOINTS_SERVICE_VERSION,
    ESPV2_ARGS, PORT,
};
use crate::config::LauncherConfig;
use crate::error::LaunchError;

/// Build the full proxy command line.
///
/// Fails with `MissingVariable` when PORT is absent, or when neither a
/// service path nor a service name is given, and with
/// `MalformedConfiguration` when `ESPv2_ARGS` has an empty delimiter or is
/// not valid UTF-8.
pub fn build_args(env: &Environment, config: &LauncherConfig) -> Result<CommandLine, LaunchError> {
    let mut cmd = CommandLine::new(&config.interpreter);
    cmd.push(&config.entrypoint);
    cmd.push("--enable_backend_routing");
    cmd.push(format!("--compute_platform_override={}", config.platform));

    let port = env.require(PORT)?;
    cmd.push(flag("--http_port", port));

    if let Some(path) = env.get(ENDPOINTS_SERVICE_PATH) {
        cmd.push("--rollout_strategy=fixed");
        cmd.push(flag("--service_json_path", path));
    } else {
        let service = env.require(ENDPOINTS_SERVICE_NAME)?;
        cmd.push(flag("--service", service));

        match env.get(ENDPOINTS_SERVICE_VERSION) {
            Some(version) => {
                cmd.push("--rollout_strategy=fixed");
                cmd.push(flag("--version", version));
            }
            None => cmd.push("--rollout_strategy=managed"),
        }
    }

    if let Some(raw) = env.get(ESPV2_ARGS) {
        let raw = raw.to_str().ok_or_else(|| {
            LaunchError::MalformedConfiguration(MALFORMED_ARGS_MESSAGE.to_string())
        })?;
        cmd.extend(parse_extra_args(raw)?);
    }

    tracing::debug!(argc = cmd.argv().len(), "Built proxy command line");
    Ok(cmd)
}

/// `<name>=<value>` without forcing the value through UTF-8.
fn flag(name: &str, value: &OsStr) -> OsString {
    let mut arg = OsString::from(name);
    arg.push("=");
    arg.push(value);
    arg
}
