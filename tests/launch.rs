//! End-to-end launch scenarios against real sockets.

use std::time::Duration;

use axum::{routing::get, Router};
use tokio::net::TcpListener;

use appboot::app::{AppRef, AppRegistry};
use appboot::config::BindConfig;
use appboot::lifecycle::Shutdown;
use appboot::server::{LaunchError, Server};

fn test_config(port: u16) -> BindConfig {
    BindConfig {
        host: "127.0.0.1".to_string(),
        port,
    }
}

fn test_app() -> Router {
    Router::new().route("/", get(|| async { "ok" }))
}

#[tokio::test]
async fn serves_then_shuts_down_cleanly() {
    let port = 29101;
    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    let server = Server::new(test_config(port), test_app());

    let handle = tokio::spawn(async move { server.run(server_shutdown).await });

    tokio::time::sleep(Duration::from_millis(200)).await;

    let client = reqwest::Client::builder().no_proxy().build().unwrap();
    let res = client
        .get(format!("http://127.0.0.1:{port}/"))
        .send()
        .await
        .expect("Server unreachable");
    assert_eq!(res.status(), 200);

    shutdown.trigger();

    let outcome = tokio::time::timeout(Duration::from_secs(5), handle)
        .await
        .expect("Shutdown timed out")
        .unwrap();
    assert!(
        outcome.is_ok(),
        "Clean shutdown should report success: {outcome:?}"
    );
}

#[tokio::test]
async fn occupied_port_is_fatal() {
    let port = 29102;
    let _occupant = TcpListener::bind(("127.0.0.1", port)).await.unwrap();

    let shutdown = Shutdown::new();
    let result = Server::new(test_config(port), test_app())
        .run(shutdown.subscribe())
        .await;

    match result {
        Err(LaunchError::Bind { .. }) => {}
        other => panic!("Expected bind failure, got {other:?}"),
    }
}

#[tokio::test]
async fn invalid_interface_fails_before_bind() {
    let config = BindConfig {
        host: "bad-interface".to_string(),
        port: 29103,
    };

    let shutdown = Shutdown::new();
    let result = Server::new(config, test_app())
        .run(shutdown.subscribe())
        .await;

    assert!(matches!(result, Err(LaunchError::Config(_))));
}

#[tokio::test]
async fn unresolved_entry_point_leaves_port_unbound() {
    let registry = AppRegistry::new();
    let app_ref = AppRef::parse("app:missing").unwrap();

    assert!(registry.resolve(&app_ref).is_err());

    // The failed resolution took no socket; the port is still free to bind.
    let probe = TcpListener::bind("127.0.0.1:29104").await;
    assert!(probe.is_ok());
}
