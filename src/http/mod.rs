//! HTTP subsystem.
//!
//! Only used when the proxy cannot be configured.
//!
//! # Data Flow
//! ```text
//! recoverable LaunchError
//!     → server.rs (bind PORT, 503 + message for every request)
//!     → serves until the container is killed
//! ```

pub mod server;

pub use server::{serve_error, ErrorServer};
