//! Application entry point addressing and resolution.
//!
//! # Responsibilities
//! - Parse `"module:symbol"` references
//! - Resolve a reference against the registry of exported entry points
//! - Surface an unresolvable reference before any socket is bound
//!
//! # Design Decisions
//! - The hosted application is opaque: the launcher only needs a value it can
//!   hand to the serve loop, never its routes or handlers
//! - Resolution failure is fatal and not retried

use std::collections::HashMap;
use std::fmt;

use axum::Router;
use thiserror::Error;

/// Reference the binary launches by default.
pub const DEFAULT_APP: &str = "app:application";

/// Factory producing the hosted application object.
pub type AppFactory = fn() -> Router;

/// Errors that can occur while loading the application entry point.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The reference text is not of the form `module:symbol`.
    #[error("malformed application reference {value:?}: expected \"module:symbol\"")]
    Malformed { value: String },

    /// No entry point is exported under the referenced name.
    #[error("no entry point registered for {module}:{symbol}")]
    Unresolved { module: String, symbol: String },
}

/// Module path plus exported symbol name identifying the entry point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppRef {
    pub module: String,
    pub symbol: String,
}

impl AppRef {
    /// Parse a `"module:symbol"` reference. Both parts must be non-empty.
    pub fn parse(value: &str) -> Result<Self, LoadError> {
        match value.split_once(':') {
            Some((module, symbol)) if !module.is_empty() && !symbol.is_empty() => Ok(Self {
                module: module.to_string(),
                symbol: symbol.to_string(),
            }),
            _ => Err(LoadError::Malformed {
                value: value.to_string(),
            }),
        }
    }
}

impl fmt::Display for AppRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.module, self.symbol)
    }
}

/// Registry of exported application entry points.
///
/// Models module-path-plus-symbol addressing without dynamic loading: the
/// binary registers the factories it exports, and the launcher resolves the
/// configured reference against them exactly once.
#[derive(Default)]
pub struct AppRegistry {
    entries: HashMap<String, AppFactory>,
}

impl AppRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Export an entry point under `module:symbol`.
    pub fn register(&mut self, module: &str, symbol: &str, factory: AppFactory) {
        self.entries.insert(format!("{module}:{symbol}"), factory);
    }

    /// Resolve a reference to a concrete application object.
    pub fn resolve(&self, app_ref: &AppRef) -> Result<Router, LoadError> {
        match self.entries.get(&app_ref.to_string()) {
            Some(factory) => Ok(factory()),
            None => Err(LoadError::Unresolved {
                module: app_ref.module.clone(),
                symbol: app_ref.symbol.clone(),
            }),
        }
    }
}
