use super::helpers::{api_base_url, post_json};

use client_core::endpoint_client::{EndpointClient, EndpointResponse, HttpEndpointClient};
use client_core::error::EndpointError;

use common::HttpStatusCode;
use models::Token;

use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============================================================================
// Public API tests for the reqwest endpoint client
// ============================================================================

/// **VALUE**: Verifies `authenticate()` issues `GET {base}/login` and decodes the token.
///
/// **BUG THIS CATCHES**: Would catch a wrong path join (e.g. `/challenge/login`).
#[tokio::test]
async fn given_login_endpoint_when_authenticate_called_then_token_decoded() {
    // GIVEN: A login endpoint
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/challenge/api/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "api_key": "abc123" })))
        .expect(1)
        .mount(&server)
        .await;
    let client = HttpEndpointClient::new(&api_base_url(&server)).unwrap();

    // WHEN: Authenticating
    let outcome = client.authenticate().await.unwrap();

    // THEN: Token decoded
    match outcome {
        EndpointResponse::Success(Some(token)) => assert_eq!(token, Token::new("abc123")),
        other => panic!("Expected Success(Some), got {other:?}"),
    }
}

/// **VALUE**: Verifies `fetch_posts()` sends the access token header.
///
/// **WHY THIS MATTERS**: The users endpoint rejects requests without
/// `x-access-token`; the mock only matches when the header is present.
#[tokio::test]
async fn given_token_when_fetch_posts_called_then_header_sent_and_posts_decoded() {
    // GIVEN: A users endpoint that requires the header
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/challenge/api/users"))
        .and(header("x-access-token", "abc123"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([post_json(1), post_json(2)])),
        )
        .expect(1)
        .mount(&server)
        .await;
    let client = HttpEndpointClient::new(&api_base_url(&server)).unwrap();

    // WHEN: Fetching posts
    let outcome = client.fetch_posts("abc123").await.unwrap();

    // THEN: Both posts decoded in order
    match outcome {
        EndpointResponse::Success(Some(posts)) => {
            let ids: Vec<u64> = posts.iter().map(|post| post.id).collect();
            assert_eq!(ids, vec![1, 2]);
        }
        other => panic!("Expected Success(Some), got {other:?}"),
    }
}

/// **VALUE**: Verifies non-2xx responses are returned as `Failure`, not `Err`.
#[tokio::test]
async fn given_unauthorized_when_fetch_posts_called_then_failure_with_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/challenge/api/users"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({ "message": "token required" })),
        )
        .mount(&server)
        .await;
    let client = HttpEndpointClient::new(&api_base_url(&server)).unwrap();

    let outcome = client.fetch_posts("").await.unwrap();

    match outcome {
        EndpointResponse::Failure { status, body } => {
            assert_eq!(status, HttpStatusCode(401));
            assert!(body.unwrap().contains("token required"));
        }
        other => panic!("Expected Failure, got {other:?}"),
    }
}

/// **VALUE**: Verifies a token that cannot be a header value fails locally.
///
/// **BUG THIS CATCHES**: Would catch the header error being deferred to
/// `send()` and misreported as a transport failure.
#[tokio::test]
async fn given_token_with_newline_when_fetch_posts_called_then_invalid_header_error() {
    let server = MockServer::start().await;
    let client = HttpEndpointClient::new(&api_base_url(&server)).unwrap();

    let result = client.fetch_posts("abc\n123").await;

    assert!(
        matches!(result, Err(EndpointError::InvalidHeader { header: "x-access-token", .. })),
        "Expected InvalidHeader, got {result:?}"
    );
}

/// **VALUE**: Verifies an unreachable host is a transport error.
#[tokio::test]
async fn given_unreachable_host_when_authenticate_called_then_transport_error() {
    // GIVEN: A port nothing listens on
    let client = HttpEndpointClient::new("http://127.0.0.1:1/challenge/api/").unwrap();

    // WHEN: Authenticating
    let result = client.authenticate().await;

    // THEN: Transport failure with a message
    match result {
        Err(error @ EndpointError::Transport { .. }) => {
            assert!(error.is_transport());
            assert!(!error.message().is_empty());
        }
        other => panic!("Expected Transport error, got {other:?}"),
    }
}

/// **VALUE**: Verifies the configured timeout bounds a slow response.
#[tokio::test]
async fn given_slow_server_when_authenticate_called_then_timeout_reported() {
    // GIVEN: A login that answers after the client gives up
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/challenge/api/login"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "api_key": "abc123" }))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;
    let client =
        HttpEndpointClient::with_timeout(&api_base_url(&server), Duration::from_millis(200))
            .unwrap();

    // WHEN: Authenticating
    let result = client.authenticate().await;

    // THEN: Timed out
    match result {
        Err(EndpointError::Transport { is_timeout, .. }) => assert!(is_timeout),
        other => panic!("Expected timeout, got {other:?}"),
    }
}
