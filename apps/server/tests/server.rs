//! End-to-end tests against a server bound to an ephemeral port.

use std::net::TcpListener;

use greeter::http;
use models::{HealthResponse, RootResponse};
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

struct TestApp {
    address: String,
    shutdown: oneshot::Sender<()>,
    server: JoinHandle<anyhow::Result<()>>,
}

fn spawn_app() -> TestApp {
    // ':0' means request random port from system.
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind random port.");
    let port = listener.local_addr().unwrap().port();

    let (shutdown, signal) = oneshot::channel::<()>();
    let server = tokio::spawn(http::run(listener, async {
        signal.await.ok();
    }));

    TestApp {
        address: format!("http://127.0.0.1:{}", port),
        shutdown,
        server,
    }
}

#[tokio::test]
async fn serves_both_routes_over_http() {
    let app = spawn_app();
    let client = reqwest::Client::new();

    let response = client
        .get(&app.address)
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(200, response.status().as_u16());
    assert_eq!(
        response.json::<RootResponse>().await.unwrap(),
        RootResponse::good_morning()
    );

    let response = client
        .get(&format!("{}/health", app.address))
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(200, response.status().as_u16());
    assert_eq!(
        response.json::<HealthResponse>().await.unwrap(),
        HealthResponse::ok()
    );
}

#[tokio::test]
async fn post_to_root_does_not_greet() {
    let app = spawn_app();

    let response = reqwest::Client::new()
        .post(&app.address)
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(405, response.status().as_u16());
}

#[tokio::test]
async fn shutdown_releases_the_listener() {
    let app = spawn_app();
    let client = reqwest::Client::new();

    let response = client
        .get(&format!("{}/health", app.address))
        .send()
        .await
        .expect("Failed to execute request.");
    assert!(response.status().is_success());
    drop(client);

    app.shutdown.send(()).unwrap();
    app.server.await.unwrap().expect("server exited with an error");

    let after = reqwest::Client::new()
        .get(&format!("{}/health", app.address))
        .send()
        .await;
    assert!(after.is_err(), "server still answering after shutdown");
}
