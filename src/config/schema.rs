//! Launcher settings.
//!
//! These describe the proxy being launched, not the service it serves.
//! Service selection always comes from the environment snapshot; these
//! values come from command-line flags.

/// Interpreter that runs the proxy entry point.
pub const DEFAULT_INTERPRETER: &str = "/usr/local/bin/python";

/// Proxy entry point script.
pub const DEFAULT_ENTRYPOINT: &str = "/apiproxy/start_proxy.py";

/// Platform identifier passed to the proxy for telemetry.
pub const DEFAULT_PLATFORM: &str = "Cloud Run(ESPv2)";

/// Root configuration for the launcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LauncherConfig {
    /// Program the current process is replaced with.
    pub interpreter: String,

    /// Proxy script handed to the interpreter as its first argument.
    pub entrypoint: String,

    /// Value of `--compute_platform_override`.
    pub platform: String,
}

impl Default for LauncherConfig {
    fn default() -> Self {
        Self {
            interpreter: DEFAULT_INTERPRETER.to_string(),
            entrypoint: DEFAULT_ENTRYPOINT.to_string(),
            platform: DEFAULT_PLATFORM.to_string(),
        }
    }
}
