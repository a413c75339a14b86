//! Serverless API Proxy Launcher Library
//!
//! Turns platform-injected environment variables into a proxy command line
//! and hands the process over to it, or serves a 503 explaining what is
//! missing.

pub mod args;
pub mod config;
pub mod error;
pub mod http;
pub mod lifecycle;
pub mod observability;

pub use args::CommandLine;
pub use config::{Environment, LauncherConfig};
pub use error::LaunchError;
pub use lifecycle::LaunchPlan;
