//! Startup orchestration.
//!
//! # Responsibilities
//! - Build the proxy command line from the environment snapshot
//! - Decide between handoff, error server, and crash
//! - Carry the decision out
//!
//! # Design Decisions
//! - Fail fast on a missing PORT: there is nothing to report errors on
//! - The Tokio runtime is only created on the error-server path

use serde::Serialize;

use crate::args::{build_args, CommandLine};
use crate::config::env::PORT;
use crate::config::{Environment, LauncherConfig};
use crate::error::LaunchError;
use crate::http::serve_error;
use crate::lifecycle::handoff;

/// What the launcher is going to do.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum LaunchPlan {
    /// Replace this process with the proxy.
    Exec { command: CommandLine },

    /// Serve `message` with 503 on `port` forever.
    ServeError { port: String, message: String },
}

/// Decide how to start, without side effects.
///
/// Recoverable configuration errors become `ServeError`; a missing PORT is
/// returned as an error. A non-UTF-8 PORT survives here and is rejected by
/// the error server's port parse.
pub fn plan(env: &Environment, config: &LauncherConfig) -> Result<LaunchPlan, LaunchError> {
    match build_args(env, config) {
        Ok(command) => Ok(LaunchPlan::Exec { command }),
        Err(err) if err.is_recoverable() => {
            let port = env.require(PORT)?.to_string_lossy().into_owned();
            tracing::warn!(error = %err, "Proxy configuration incomplete");
            Ok(LaunchPlan::ServeError {
                port,
                message: err.to_string(),
            })
        }
        Err(err) => Err(err),
    }
}

/// Carry out a plan. Returns only on failure.
pub fn launch(plan: LaunchPlan) -> Result<(), LaunchError> {
    match plan {
        LaunchPlan::Exec { command } => match handoff::exec(&command)? {},
        LaunchPlan::ServeError { port, message } => {
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()?;
            runtime.block_on(serve_error(&port, &message))
        }
    }
}
