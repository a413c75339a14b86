//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! launcher decisions, error-server requests
//!     → tracing events with structured fields
//!     → logging.rs subscriber (stderr)
//!     → platform log collector
//! ```
//!
//! # Design Decisions
//! - Logs go to stderr; stdout belongs to `--dry-run` output and, after
//!   handoff, to the proxy
//! - Level configurable through `RUST_LOG`

pub mod logging;
