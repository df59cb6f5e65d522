//! Session controller behavior against a mocked computation service.
//!
//! Covers the invocation ordering contract (Request entry observable before
//! the Result entry), the unconditional staging clear, and the
//! orphaned-Request behavior when the service misbehaves.

use polycalc_engine::SessionError;
use polycalc_types::{Operation, StepKind, TranscriptEntry};

use crate::common::{
    mount_computation, mount_missing_explanation, mount_service_error, session_for,
    start_service_mock,
};

#[tokio::test]
async fn successful_run_appends_request_then_result_and_clears_staging() {
    let server = start_service_mock().await;
    mount_computation(
        &server,
        Operation::Suma,
        "5x - 1",
        "◆ ordenar terminos ➡ ▶ 2x + 3x ➡ listo",
    )
    .await;

    let dir = tempfile::tempdir().unwrap();
    let mut session = session_for(&server, &dir);
    session.stage_operand("2x+1");
    session.stage_operand("3x-2");

    session.run_operation(Operation::Suma).await.unwrap();

    assert!(session.staged().is_empty());
    let entries = session.transcript().entries();
    assert_eq!(entries.len(), 2);

    let TranscriptEntry::Request(request) = &entries[0] else {
        panic!("first entry must be the request echo");
    };
    assert_eq!(request.operation(), Operation::Suma);
    let staged: Vec<_> = request.operands().iter().map(|o| o.as_str()).collect();
    assert_eq!(staged, vec!["2x+1", "3x-2"]);

    let TranscriptEntry::Result(result) = &entries[1] else {
        panic!("second entry must be the result");
    };
    assert_eq!(result.result_expression(), "5x - 1");
    assert_eq!(result.operands(), request.operands());
    assert_eq!(result.steps().len(), 3);
    assert_eq!(result.steps()[0].kind(), StepKind::Primary);
    assert_eq!(result.steps()[1].kind(), StepKind::Sub);
    assert_eq!(result.steps()[2].kind(), StepKind::Plain);
}

#[tokio::test]
async fn malformed_response_leaves_orphaned_request_and_clears_staging() {
    let server = start_service_mock().await;
    mount_missing_explanation(&server, Operation::Resta).await;

    let dir = tempfile::tempdir().unwrap();
    let mut session = session_for(&server, &dir);
    session.stage_operand("2x");
    session.stage_operand("x");

    let err = session.run_operation(Operation::Resta).await.unwrap_err();
    assert!(matches!(err, SessionError::RemoteComputationFailed(_)));

    // Request echo remains with no matching result; operands are consumed.
    let entries = session.transcript().entries();
    assert_eq!(entries.len(), 1);
    assert!(matches!(entries[0], TranscriptEntry::Request(_)));
    assert!(session.staged().is_empty());
    assert!(!session.is_busy());
}

#[tokio::test]
async fn transport_failure_behaves_like_malformed_response() {
    let server = start_service_mock().await;
    mount_service_error(&server, Operation::Division, 500).await;

    let dir = tempfile::tempdir().unwrap();
    let mut session = session_for(&server, &dir);
    session.stage_operand("x^2");
    session.stage_operand("x");

    let err = session.run_operation(Operation::Division).await.unwrap_err();
    assert!(matches!(err, SessionError::RemoteComputationFailed(_)));
    assert_eq!(session.transcript().len(), 1);
    assert!(session.staged().is_empty());
}

#[tokio::test]
async fn below_two_operands_never_calls_the_service() {
    let server = start_service_mock().await;
    // No mocks mounted: any request would 404 and, more to the point,
    // wiremock verifies that zero requests were received.

    let dir = tempfile::tempdir().unwrap();
    let mut session = session_for(&server, &dir);
    session.stage_operand("x");

    let err = session.run_operation(Operation::Suma).await.unwrap_err();
    assert!(matches!(
        err,
        SessionError::InsufficientOperands { staged: 1 }
    ));

    assert!(session.transcript().is_empty());
    assert_eq!(session.staged().len(), 1);
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn user_can_run_again_immediately_after_failure() {
    let server = start_service_mock().await;
    mount_missing_explanation(&server, Operation::Resta).await;
    mount_computation(&server, Operation::Suma, "2x", "◆ sumar").await;

    let dir = tempfile::tempdir().unwrap();
    let mut session = session_for(&server, &dir);

    session.stage_operand("x");
    session.stage_operand("x");
    assert!(session.run_operation(Operation::Resta).await.is_err());

    session.stage_operand("x");
    session.stage_operand("x");
    session.run_operation(Operation::Suma).await.unwrap();

    // Orphaned request, then the second invocation's pair.
    let entries = session.transcript().entries();
    assert_eq!(entries.len(), 3);
    assert!(matches!(entries[0], TranscriptEntry::Request(_)));
    assert!(matches!(entries[1], TranscriptEntry::Request(_)));
    assert!(matches!(entries[2], TranscriptEntry::Result(_)));
}

#[tokio::test]
async fn operands_snapshot_keeps_staging_order() {
    let server = start_service_mock().await;
    mount_computation(&server, Operation::Multiplicacion, "x^3", "◆ multiplicar").await;

    let dir = tempfile::tempdir().unwrap();
    let mut session = session_for(&server, &dir);
    session.stage_operand("x");
    session.stage_operand("x^2");
    session.stage_operand("1");
    session.unstage_operand(2);

    session.run_operation(Operation::Multiplicacion).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    let body: serde_json::Value = requests[0].body_json().unwrap();
    assert_eq!(body["polinomios"], serde_json::json!(["x", "x^2"]));
}
