//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! fixed defaults (0.0.0.0:10000)
//!     → loader.rs (optional bootstrap.toml overlay)
//!     → HOST / PORT environment overrides
//!     → BindConfig (validated, immutable)
//! ```
//!
//! # Design Decisions
//! - Config is immutable once resolved; there is no reload path
//! - A malformed override is fatal, never silently replaced by a default:
//!   binding the wrong port on a PaaS target makes the deployment unreachable
//! - All validation runs before any bind attempt

pub mod loader;
pub mod schema;

pub use loader::{resolve, resolve_with, ConfigError};
pub use schema::BindConfig;
