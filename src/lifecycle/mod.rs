//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Resolve config → Announce bind parameters → Load entry point → Serve
//!
//! Shutdown (shutdown.rs):
//!     Signal received → Stop accepting → Drain in-flight requests → Exit
//!
//! Signals (signals.rs):
//!     SIGTERM/SIGINT → Trigger graceful shutdown
//! ```
//!
//! # Design Decisions
//! - One execution path: no re-entry, no restart loop (restarts belong to the
//!   platform supervisor)
//! - The serve loop observes shutdown through a broadcast channel; signals are
//!   the only producer in production, tests trigger it directly

pub mod shutdown;
pub mod signals;
pub mod startup;

pub use shutdown::Shutdown;
