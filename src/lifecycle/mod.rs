//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Environment → build args → LaunchPlan
//!         Exec       → handoff.rs (replace process image)
//!         ServeError → http::serve_error (503 forever)
//!         fatal      → error returned to main, exit 1
//! ```
//!
//! # Design Decisions
//! - Deciding and acting are separate steps, so the decision is testable
//!   without exec'ing or binding anything
//! - A missing PORT is fatal; every other configuration error degrades to
//!   the error server

pub mod handoff;
pub mod startup;

pub use handoff::exec;
pub use startup::{launch, plan, LaunchPlan};
