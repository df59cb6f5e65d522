//! Shared test utilities and fixtures
//!
//! Common infrastructure for integration tests.

#![allow(dead_code)]

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use polycalc_client::ServiceConfig;
use polycalc_engine::Session;
use polycalc_types::Operation;

/// Start a mock server that simulates the computation service.
pub async fn start_service_mock() -> MockServer {
    MockServer::start().await
}

/// Mount a well-formed computation response for one operation.
pub async fn mount_computation(
    server: &MockServer,
    operation: Operation,
    resultado: &str,
    explicacion: &str,
) {
    Mock::given(method("POST"))
        .and(path(format!("/api/polinomios/{}", operation.wire_name())))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "resultado": resultado,
            "explicacion": explicacion,
        })))
        .mount(server)
        .await;
}

/// Mount a response with `explicacion` missing, which the client must treat
/// as a failure.
pub async fn mount_missing_explanation(server: &MockServer, operation: Operation) {
    Mock::given(method("POST"))
        .and(path(format!("/api/polinomios/{}", operation.wire_name())))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "resultado": "x",
        })))
        .mount(server)
        .await;
}

/// Mount a server-side failure for one operation.
pub async fn mount_service_error(server: &MockServer, operation: Operation, status: u16) {
    Mock::given(method("POST"))
        .and(path(format!("/api/polinomios/{}", operation.wire_name())))
        .respond_with(ResponseTemplate::new(status).set_body_string("internal error"))
        .mount(server)
        .await;
}

/// Build a session pointed at the mock server, persisting into `dir`.
pub fn session_for(server: &MockServer, dir: &tempfile::TempDir) -> Session {
    Session::new(
        ServiceConfig::new(server.uri()),
        dir.path().join("transcript.json"),
    )
}
