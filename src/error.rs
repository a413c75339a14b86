//! Error type shared by every launcher subsystem.

use thiserror::Error;

use crate::config::env::PORT;

/// Errors that can occur while deciding how to start the proxy.
#[derive(Debug, Error)]
pub enum LaunchError {
    /// A required environment variable is absent.
    #[error("Serverless ApiProxy expects {0} in environment variables.")]
    MissingVariable(String),

    /// An environment variable is present but cannot be interpreted.
    #[error("{0}")]
    MalformedConfiguration(String),

    /// PORT is present but is not a TCP port number.
    #[error("PORT value {value:?} is not a valid port: {source}")]
    InvalidPort {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },

    /// Binding or serving the fallback listener failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Replacing (or spawning) the proxy process failed.
    #[error("Failed to exec {program}: {source}")]
    Exec {
        program: String,
        #[source]
        source: std::io::Error,
    },
}

impl LaunchError {
    /// Whether the error can be reported through the fallback server
    /// instead of crashing the container.
    ///
    /// A missing PORT is never recoverable: there is nothing to bind.
    pub fn is_recoverable(&self) -> bool {
        match self {
            LaunchError::MissingVariable(name) => name != PORT,
            LaunchError::MalformedConfiguration(_) => true,
            LaunchError::InvalidPort { .. } | LaunchError::Io(_) | LaunchError::Exec { .. } => false,
        }
    }
}
