//! Integration tests for outcome classification and retry
//!
//! These tests run the full request/classification cycle against a wiremock
//! server, covering all three outcome variants and the retry executor's
//! interaction with real calls.

use std::time::Duration;

use net_client::{execute_with_retry, CallOptions, HttpClient, NetworkOutcome, RetryPolicy};
use serde::{Deserialize, Serialize};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
struct Payload {
    name: String,
    value: i32,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
struct ErrorBody {
    detail: String,
}

fn client() -> HttpClient {
    HttpClient::new(reqwest::Client::new())
}

#[tokio::test]
async fn test_2xx_with_decodable_body_is_success() {
    let server = MockServer::start().await;
    let payload = Payload { name: "ok".to_string(), value: 42 };

    Mock::given(method("GET"))
        .and(path("/payload"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&payload))
        .mount(&server)
        .await;

    let http = client();
    let outcome: NetworkOutcome<Payload, ErrorBody> = http
        .send(http.get(&format!("{}/payload", server.uri())), &CallOptions::default())
        .await;

    assert_eq!(outcome.into_body(), Some(payload));
}

#[tokio::test]
async fn test_non_2xx_is_application_error_with_decoded_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_json(&ErrorBody { detail: "not found".to_string() }),
        )
        .mount(&server)
        .await;

    let http = client();
    let outcome: NetworkOutcome<Payload, ErrorBody> = http
        .send(http.get(&format!("{}/missing", server.uri())), &CallOptions::default())
        .await;

    match outcome {
        NetworkOutcome::ApplicationError { body, status, .. } => {
            assert_eq!(status, 404);
            assert_eq!(body.map(|b| b.detail), Some("not found".to_string()));
        }
        other => panic!("expected application error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_non_2xx_with_undecodable_error_body_keeps_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/broken"))
        .respond_with(ResponseTemplate::new(500).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let http = client();
    let outcome: NetworkOutcome<Payload, ErrorBody> = http
        .send(http.get(&format!("{}/broken", server.uri())), &CallOptions::default())
        .await;

    match outcome {
        NetworkOutcome::ApplicationError { body, status, source } => {
            assert!(body.is_none());
            assert_eq!(status, 500);
            assert!(source.is_some());
        }
        other => panic!("expected application error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_2xx_with_schema_mismatch_is_reclassified() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/mismatch"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&serde_json::json!({
            "unexpected": true
        })))
        .mount(&server)
        .await;

    let http = client();
    let outcome: NetworkOutcome<Payload, ErrorBody> = http
        .send(http.get(&format!("{}/mismatch", server.uri())), &CallOptions::default())
        .await;

    match outcome {
        NetworkOutcome::ApplicationError { body, status, source } => {
            assert!(body.is_none());
            assert_eq!(status, 200);
            assert!(source.is_some());
        }
        other => panic!("expected reclassified application error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_connection_failure_is_transport_error() {
    // Nothing listens on this port; the connect fails before any response.
    let http = client();
    let outcome: NetworkOutcome<Payload, ErrorBody> = http
        .send(http.get("http://127.0.0.1:9/unreachable"), &CallOptions::default())
        .await;

    assert!(matches!(outcome, NetworkOutcome::TransportError(_)));
    assert!(outcome.is_retryable());
}

#[tokio::test]
async fn test_per_call_timeout_override_is_transport_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(&Payload { name: "late".to_string(), value: 1 })
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;

    let http = client();
    let outcome: NetworkOutcome<Payload, ErrorBody> = http
        .send(
            http.get(&format!("{}/slow", server.uri())),
            &CallOptions::with_timeout(Duration::from_millis(50)),
        )
        .await;

    assert!(matches!(outcome, NetworkOutcome::TransportError(_)));
}

#[tokio::test]
async fn test_retry_recovers_after_transient_transport_failure() {
    let server = MockServer::start().await;
    let payload = Payload { name: "recovered".to_string(), value: 7 };

    // First response stalls past the per-call timeout, the rest are fast.
    Mock::given(method("GET"))
        .and(path("/flaky"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(&payload)
                .set_delay(Duration::from_secs(5)),
        )
        .up_to_n_times(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/flaky"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&payload))
        .mount(&server)
        .await;

    let http = client();
    let url = format!("{}/flaky", server.uri());
    let options = CallOptions::with_timeout(Duration::from_millis(100));
    let policy = RetryPolicy::new(3).with_initial_delay(Duration::from_millis(10));

    let outcome: NetworkOutcome<Payload, ErrorBody> =
        execute_with_retry(&policy, || http.send(http.get(&url), &options)).await;

    assert_eq!(outcome.into_body(), Some(payload));
}

#[tokio::test]
async fn test_retry_does_not_repeat_application_errors() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rejected"))
        .respond_with(
            ResponseTemplate::new(400)
                .set_body_json(&ErrorBody { detail: "bad request".to_string() }),
        )
        .expect(1)
        .mount(&server)
        .await;

    let http = client();
    let url = format!("{}/rejected", server.uri());
    let policy = RetryPolicy::new(5).with_initial_delay(Duration::from_millis(10));
    let options = CallOptions::default();

    let outcome: NetworkOutcome<Payload, ErrorBody> = execute_with_retry(&policy, || {
        http.send(http.get(&url), &options)
    })
    .await;

    match outcome {
        NetworkOutcome::ApplicationError { status, .. } => assert_eq!(status, 400),
        other => panic!("expected application error, got {other:?}"),
    }
}
