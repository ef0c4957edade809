//! Deployment bootstrap library.
//!
//! Resolves the bind configuration for a hosted HTTP application, loads the
//! application entry point, and runs a single server whose lifetime equals the
//! process lifetime. Routing and request handling belong to the hosted
//! application; this crate only gets it on the network and reports how it ended.
//!
//! ```text
//! resolve config → announce → load entry point → serve (blocks) → exit status
//! ```

pub mod app;
pub mod config;
pub mod lifecycle;
pub mod server;

pub use app::{AppRef, AppRegistry};
pub use config::BindConfig;
pub use lifecycle::Shutdown;
pub use server::Server;
