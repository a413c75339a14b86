//! Process handoff to the proxy.
//!
//! On Unix the launcher's process image is replaced, so the proxy keeps the
//! PID, environment and open descriptors. Elsewhere the proxy is spawned as
//! a child, waited on, and its exit code becomes the launcher's.

use std::convert::Infallible;
use std::process::Command;

use crate::args::CommandLine;
use crate::error::LaunchError;

/// Replace the current process with `command`.
///
/// Only returns on failure.
#[cfg(unix)]
pub fn exec(command: &CommandLine) -> Result<Infallible, LaunchError> {
    use std::os::unix::process::CommandExt;

    tracing::info!(command = %command, "Handing off to proxy");

    let source = Command::new(command.program()).args(command.args()).exec();
    Err(LaunchError::Exec {
        program: command.program().to_string_lossy().into_owned(),
        source,
    })
}

/// Run `command` as a child and exit with its status.
#[cfg(not(unix))]
pub fn exec(command: &CommandLine) -> Result<Infallible, LaunchError> {
    tracing::info!(command = %command, "Spawning proxy");

    let status = Command::new(command.program())
        .args(command.args())
        .status()
        .map_err(|source| LaunchError::Exec {
            program: command.program().to_string_lossy().into_owned(),
            source,
        })?;

    tracing::info!(status = %status, "Proxy exited");
    std::process::exit(status.code().unwrap_or(1))
}
