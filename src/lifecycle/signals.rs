//! OS signal handling.
//!
//! # Responsibilities
//! - Register SIGTERM and SIGINT (Ctrl+C) handlers
//! - Translate the first delivered signal into a shutdown trigger
//!
//! # Design Decisions
//! - Uses Tokio's signal handling (async-safe)
//! - The launcher exposes no cancellation of its own; termination always
//!   arrives from the platform as a signal

use crate::lifecycle::shutdown::Shutdown;

/// Wait for a termination signal, then trigger shutdown.
///
/// Runs as a background task for the whole server lifetime; it resolves at
/// most once.
pub async fn listen(shutdown: Shutdown) {
    wait_for_termination().await;
    tracing::info!("Shutdown signal received");
    shutdown.trigger();
}

async fn wait_for_termination() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        signal(SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
