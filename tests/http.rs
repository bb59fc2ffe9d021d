//! HTTP adapter tests: routing, status mapping, and response shape.
//!
//! These drive the router in-process against the mock endpoint.
//! Run with: cargo test --test http

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use http_body_util::BodyExt;
use inference_service::config::ServiceConfig;
use inference_service::services::endpoint::mock::MockEndpoint;
use inference_service::services::endpoint::{Generation, InferenceEndpoint};
use inference_service::startup::{router, AppState};
use std::sync::Arc;
use tower::ServiceExt;

fn test_state(endpoint: Arc<MockEndpoint>) -> AppState {
    AppState {
        config: ServiceConfig { port: 0 },
        endpoint: endpoint as Arc<dyn InferenceEndpoint>,
    }
}

fn single_generation(text: &str) -> Vec<u8> {
    serde_json::to_vec(&vec![Generation {
        generated_text: text.to_string(),
    }])
    .expect("Failed to serialize generation")
}

async fn send(state: AppState, uri: &str) -> (StatusCode, Option<String>, String) {
    let response = router(state)
        .oneshot(
            Request::builder()
                .uri(uri)
                .body(Body::empty())
                .expect("Failed to build request"),
        )
        .await
        .expect("Failed to route request");

    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .map(|v| v.to_str().expect("non-ASCII content type").to_string());
    let body = response
        .into_body()
        .collect()
        .await
        .expect("Failed to read body")
        .to_bytes();

    (
        status,
        content_type,
        String::from_utf8(body.to_vec()).expect("non-UTF-8 body"),
    )
}

#[tokio::test]
async fn generate_relays_generated_text() {
    let endpoint = Arc::new(MockEndpoint::returning(single_generation("4")));

    let (status, content_type, body) = send(
        test_state(endpoint.clone()),
        "/generate?query=What%20is%202%2B2%3F",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type.as_deref(), Some("application/json"));
    assert_eq!(body, "\"4\"");

    let invocations = endpoint.invocations();
    assert_eq!(invocations.len(), 1);
    assert_eq!(invocations[0].inputs, "What is 2+2?");
}

#[tokio::test]
async fn generate_without_query_string_returns_bad_request() {
    let endpoint = Arc::new(MockEndpoint::returning(single_generation("never")));

    let (status, _, _) = send(test_state(endpoint.clone()), "/generate").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(endpoint.invocations().is_empty());
}

#[tokio::test]
async fn generate_with_wrong_parameter_returns_bad_request() {
    let endpoint = Arc::new(MockEndpoint::returning(single_generation("never")));

    let (status, _, body) = send(test_state(endpoint.clone()), "/generate?prompt=hi").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(endpoint.invocations().is_empty());

    let json: serde_json::Value = serde_json::from_str(&body).expect("error body is not JSON");
    assert!(json["error"]
        .as_str()
        .expect("missing error field")
        .contains("query"));
}

#[tokio::test]
async fn failing_endpoint_returns_bad_gateway() {
    let endpoint = Arc::new(MockEndpoint::failing());

    let (status, _, body) = send(test_state(endpoint), "/generate?query=hi").await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);

    let json: serde_json::Value = serde_json::from_str(&body).expect("error body is not JSON");
    assert!(json["error"]
        .as_str()
        .expect("missing error field")
        .contains("Bad Gateway"));
}

#[tokio::test]
async fn malformed_endpoint_response_returns_bad_gateway() {
    let endpoint = Arc::new(MockEndpoint::returning(b"[]".to_vec()));

    let (status, _, _) = send(test_state(endpoint), "/generate?query=hi").await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
}
