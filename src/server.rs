//! HTTP server launch.
//!
//! # Responsibilities
//! - Bind the listener on the resolved address
//! - Hand the hosted application to the serve loop
//! - Block until shutdown or failure, then report the outcome
//!
//! # Design Decisions
//! - The launcher's lifetime equals the server's: one blocking run call in the
//!   current process, no supervised child
//! - Bind failure is fatal and never retried; restart policy belongs to the
//!   platform supervisor
//! - The listener is owned by the serve future and closed on every exit path

use axum::Router;
use thiserror::Error;
use tokio::net::TcpListener;
use tokio::sync::broadcast;

use crate::config::{BindConfig, ConfigError};

/// Errors that can occur while launching or running the server.
#[derive(Debug, Error)]
pub enum LaunchError {
    /// The resolved configuration does not name a usable interface.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The resolved address could not be bound (permission, port in use).
    #[error("failed to bind {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },

    /// The serve loop ended with an I/O failure.
    #[error("server error: {0}")]
    Serve(#[source] std::io::Error),
}

/// The single server the launcher hosts.
pub struct Server {
    config: BindConfig,
    app: Router,
}

impl Server {
    /// Create a server for the resolved configuration and loaded application.
    pub fn new(config: BindConfig, app: Router) -> Self {
        Self { config, app }
    }

    /// Bind and serve until the shutdown signal fires or the serve loop fails.
    ///
    /// Returns `Ok(())` only after a clean drain; the caller maps the result
    /// onto the process exit status.
    pub async fn run(self, mut shutdown: broadcast::Receiver<()>) -> Result<(), LaunchError> {
        let addr = self.config.socket_addr()?;

        let listener = TcpListener::bind(addr)
            .await
            .map_err(|source| LaunchError::Bind {
                address: addr.to_string(),
                source,
            })?;
        let local_addr = listener.local_addr().map_err(LaunchError::Serve)?;

        tracing::info!(address = %local_addr, "Listening for connections");

        axum::serve(listener, self.app)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Draining connections");
            })
            .await
            .map_err(LaunchError::Serve)?;

        tracing::info!("Server stopped");
        Ok(())
    }
}
