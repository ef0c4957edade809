//! Deployment bootstrap binary.
//!
//! Single execution path: resolve the bind configuration, announce it, load
//! the application entry point, run the server, and propagate its outcome as
//! the process exit status. Every failure is fatal and surfaces as a non-zero
//! exit; the platform supervisor owns restart policy.

use std::process::ExitCode;

use axum::Router;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use appboot::app::{AppRef, AppRegistry, DEFAULT_APP};
use appboot::config;
use appboot::lifecycle::{signals, startup, Shutdown};
use appboot::server::Server;

/// The entry point this deployment exports.
///
/// Stands in for the externally owned application object; the launcher never
/// looks inside it.
fn application() -> Router {
    Router::new()
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "appboot=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match config::resolve() {
        Ok(config) => config,
        Err(error) => {
            tracing::error!(%error, "Configuration rejected");
            return ExitCode::FAILURE;
        }
    };

    if let Err(error) = startup::announce_stdout(&config) {
        tracing::error!(%error, "Failed to emit start notice");
        return ExitCode::FAILURE;
    }

    let mut registry = AppRegistry::new();
    registry.register("app", "application", application);

    let app = match AppRef::parse(DEFAULT_APP).and_then(|app_ref| registry.resolve(&app_ref)) {
        Ok(app) => app,
        Err(error) => {
            tracing::error!(%error, "Failed to load application entry point");
            return ExitCode::FAILURE;
        }
    };

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(signals::listen(shutdown.clone()));

    match Server::new(config, app).run(server_shutdown).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            tracing::error!(%error, "Server failed");
            ExitCode::FAILURE
        }
    }
}
