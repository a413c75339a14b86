//! Configuration subsystem.
//!
//! # Data Flow
//! ```text
//! process environment
//!     → env.rs (snapshot once, immutable)
//!     → args::build_args (require / get by name)
//!
//! command-line flags
//!     → schema.rs (LauncherConfig: interpreter, entry point, platform)
//! ```
//!
//! # Design Decisions
//! - The environment is read exactly once, in `main`
//! - All launcher settings have defaults; flags only override them

pub mod env;
pub mod schema;

pub use env::Environment;
pub use schema::LauncherConfig;
