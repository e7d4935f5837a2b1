use super::helpers::{api_base_url, post_json};

use client_core::ResponseState;
use client_core::config::ClientConfig;
use client_core::endpoint_client::{EndpointClient, HttpEndpointClient};
use client_core::repository::PostsRepository;
use client_core::view_model::PostsViewModel;
use client_core::wiring::build_view_model;

use models::Token;

use std::sync::Arc;

use futures_util::StreamExt;
use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn view_model_for(server: &MockServer) -> PostsViewModel {
    let endpoints: Arc<dyn EndpointClient> =
        Arc::new(HttpEndpointClient::new(&api_base_url(server)).unwrap());
    let repository = PostsRepository::new(endpoints).unwrap();
    PostsViewModel::new(Arc::new(repository))
}

// ============================================================================
// End-to-end: view-model → repository → reqwest → mock server
// ============================================================================

/// **VALUE**: Verifies a 200 login yields `Loading` then `Success(token)` end to end.
#[tokio::test]
async fn given_login_ok_when_authentication_observed_then_loading_then_token() {
    // GIVEN: A login endpoint returning a key
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/challenge/api/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "api_key": "abc123" })))
        .mount(&server)
        .await;
    let view_model = view_model_for(&server);

    // WHEN: Observing the channel to completion
    let states: Vec<ResponseState<Token>> = view_model.authentication().collect().await;

    // THEN: Loading, then the token
    assert_eq!(states.len(), 2, "Got {states:?}");
    assert!(states[0].is_loading());
    assert!(
        matches!(&states[1], ResponseState::Success(Some(token)) if token == &Token::new("abc123"))
    );
}

/// **VALUE**: Verifies a 400 login surfaces the server's message end to end.
#[tokio::test]
async fn given_login_rejected_when_authentication_observed_then_error_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/challenge/api/login"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({ "message": "invalid credentials" })),
        )
        .mount(&server)
        .await;
    let view_model = view_model_for(&server);

    let terminal = view_model.authentication().terminal().await;

    assert!(
        matches!(&terminal, Some(ResponseState::Error(Some(message))) if message == "invalid credentials"),
        "Got {terminal:?}"
    );
}

/// **VALUE**: Verifies a failure without a body yields `Error(None)`.
#[tokio::test]
async fn given_login_500_without_body_when_authentication_observed_then_error_none() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/challenge/api/login"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    let view_model = view_model_for(&server);

    let terminal = view_model.authentication().terminal().await;

    assert!(matches!(terminal, Some(ResponseState::Error(None))), "Got {terminal:?}");
}

/// **VALUE**: Verifies the posts call carries the header and preserves order end to end.
///
/// **BUG THIS CATCHES**: Would catch the token not reaching the header (the
/// mock would not match and the server would answer 404).
#[tokio::test]
async fn given_three_posts_when_get_all_posts_observed_then_success_in_order() {
    // GIVEN: A users endpoint that only answers with the right header
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/challenge/api/users"))
        .and(header("x-access-token", "abc123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            post_json(1),
            post_json(2),
            post_json(3)
        ])))
        .expect(1)
        .mount(&server)
        .await;
    let view_model = view_model_for(&server);

    // WHEN: Fetching
    let terminal = view_model.get_all_posts("abc123").terminal().await;

    // THEN: Three posts in wire order
    match terminal {
        Some(ResponseState::Success(Some(posts))) => {
            let ids: Vec<u64> = posts.iter().map(|post| post.id).collect();
            assert_eq!(ids, vec![1, 2, 3]);
        }
        other => panic!("Expected Success(posts), got {other:?}"),
    }
}

/// **VALUE**: Verifies an empty 200 body reaches the observer as `Success(None)`.
///
/// **WHY THIS MATTERS**: This is the only case in which the screen falls back
/// to its bundled listing.
#[tokio::test]
async fn given_empty_posts_body_when_get_all_posts_observed_then_success_none() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/challenge/api/users"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;
    let view_model = view_model_for(&server);

    let terminal = view_model.get_all_posts("abc123").terminal().await;

    assert!(matches!(terminal, Some(ResponseState::Success(None))), "Got {terminal:?}");
}

/// **VALUE**: Verifies a 200 body of the wrong shape is an `Error`, not an empty success.
#[tokio::test]
async fn given_wrong_shape_posts_body_when_get_all_posts_observed_then_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/challenge/api/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "users": [] })))
        .mount(&server)
        .await;
    let view_model = view_model_for(&server);

    let terminal = view_model.get_all_posts("abc123").terminal().await;

    assert!(
        matches!(terminal, Some(ResponseState::Error(Some(_)))),
        "Got {terminal:?}"
    );
}

/// **VALUE**: Verifies an invalid token surfaces as `Exception` without any request.
#[tokio::test]
async fn given_token_with_newline_when_get_all_posts_observed_then_exception() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;
    let view_model = view_model_for(&server);

    let terminal = view_model.get_all_posts("abc\n123").terminal().await;

    assert!(
        matches!(terminal, Some(ResponseState::Exception(_))),
        "Got {terminal:?}"
    );
}

/// **VALUE**: Verifies the config-driven wiring talks to the configured base URL.
#[tokio::test]
async fn given_config_pointing_at_mock_when_wired_then_requests_reach_mock() {
    // GIVEN: A config targeting the mock server (no trailing slash)
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/challenge/api/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "api_key": "wired" })))
        .expect(1)
        .mount(&server)
        .await;
    let mut config = ClientConfig::default();
    config.server.base_url = format!("{}/challenge/api", server.uri());

    // WHEN: Building the stack from config and logging in
    let view_model = build_view_model(&config).unwrap();
    let terminal = view_model.authentication().terminal().await;

    // THEN: The mock answered
    assert!(
        matches!(&terminal, Some(ResponseState::Success(Some(token))) if token == &Token::new("wired")),
        "Got {terminal:?}"
    );
}
