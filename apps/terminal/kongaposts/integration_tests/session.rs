// Whole-session tests: canned endpoint replies in, rendered text and outcome out.

use crate::helpers::{CannedEndpoints, failure, post, posts, token, view_model};

use client_core::assets::FsAssetReader;
use client_core::endpoint_client::EndpointResponse;
use client_core::error::EndpointError;

use kongaposts::presenter::{PostsSource, Presenter};
use kongaposts::session::{PostsSession, SessionOutcome};

use tempfile::TempDir;

const FALLBACK_FILE: &str = "DummyPost.json";

struct Run {
    outcome: SessionOutcome,
    output: String,
}

async fn run_session(endpoints: &std::sync::Arc<CannedEndpoints>, assets_dir: &TempDir) -> Run {
    let view_model = view_model(endpoints);
    let assets = FsAssetReader::new(assets_dir.path());
    let session = PostsSession::new(&view_model, &assets, FALLBACK_FILE);

    let mut presenter = Presenter::new(Vec::new());
    let outcome = session.run(&mut presenter).await.unwrap();

    Run {
        outcome,
        output: String::from_utf8(presenter.into_inner()).unwrap(),
    }
}

/// **VALUE**: Verifies the happy path: token fetched, posts fetched with it, posts rendered.
///
/// **BUG THIS CATCHES**: Would catch the token not being forwarded to the posts call
/// or the listing being reordered.
#[tokio::test]
async fn given_token_and_posts_when_session_runs_then_posts_rendered_in_order() {
    // GIVEN: Authentication succeeds and the server returns two posts
    let endpoints = CannedEndpoints::new(
        token("abc123"),
        posts(vec![post(1, "Leanne Graham", "Bret"), post(2, "Ervin Howell", "Antonette")]),
    );
    let assets_dir = TempDir::new().unwrap();

    // WHEN: Running the session
    let run = run_session(&endpoints, &assets_dir).await;

    // THEN: Both operations showed loading and both posts were rendered
    assert_eq!(
        run.outcome,
        SessionOutcome::Rendered {
            count: 2,
            source: PostsSource::Network
        }
    );
    assert!(run.output.contains("… authentication\n"));
    assert!(run.output.contains("… get_all_posts\n"));
    let first = run.output.find("Leanne Graham @Bret").unwrap();
    let second = run.output.find("Ervin Howell @Antonette").unwrap();
    assert!(first < second);
    assert_eq!(endpoints.tokens_seen(), vec![String::from("abc123")]);
}

/// **VALUE**: Verifies a rejected login is shown with the server's message and stops the session.
///
/// **WHY THIS MATTERS**: Fetching posts without a token would only produce a
/// second, misleading failure.
#[tokio::test]
async fn given_login_rejected_when_session_runs_then_error_rendered_and_no_posts_call() {
    // GIVEN: 401 with an error body
    let endpoints = CannedEndpoints::new(
        failure(401, r#"{"message":"invalid credentials"}"#),
        posts(vec![post(1, "Leanne Graham", "Bret")]),
    );
    let assets_dir = TempDir::new().unwrap();

    // WHEN: Running the session
    let run = run_session(&endpoints, &assets_dir).await;

    // THEN: Error rendered, posts never requested
    assert_eq!(run.outcome, SessionOutcome::AuthenticationFailed);
    assert!(
        run.output
            .contains("✗ authentication failed: invalid credentials"),
        "Output was:\n{}",
        run.output
    );
    assert_eq!(endpoints.posts_calls(), 0);
    assert!(!run.outcome.is_rendered());
}

/// **VALUE**: Verifies a login without a token body ends the session.
#[tokio::test]
async fn given_login_without_token_when_session_runs_then_missing_token() {
    let endpoints = CannedEndpoints::new(
        Ok(EndpointResponse::Success(None)),
        posts(vec![post(1, "Leanne Graham", "Bret")]),
    );
    let assets_dir = TempDir::new().unwrap();

    let run = run_session(&endpoints, &assets_dir).await;

    assert_eq!(run.outcome, SessionOutcome::MissingToken);
    assert!(run.output.contains("authentication returned no token"));
    assert_eq!(endpoints.posts_calls(), 0);
}

/// **VALUE**: Verifies an empty posts response falls back to the bundled listing.
///
/// **BUG THIS CATCHES**: Would catch `Success(None)` being rendered as "No posts."
/// instead of reading the fallback file.
#[tokio::test]
async fn given_posts_without_body_when_session_runs_then_fallback_rendered() {
    // GIVEN: Posts call succeeds without a body; fallback file holds one post
    let endpoints = CannedEndpoints::new(token("abc123"), Ok(EndpointResponse::Success(None)));
    let assets_dir = TempDir::new().unwrap();
    let fallback = serde_json::to_string(&vec![post(7, "Kurtis Weissnat", "Elwyn.Skiles")]).unwrap();
    std::fs::write(assets_dir.path().join(FALLBACK_FILE), fallback).unwrap();

    // WHEN: Running the session
    let run = run_session(&endpoints, &assets_dir).await;

    // THEN: Fallback post rendered and labelled
    assert_eq!(
        run.outcome,
        SessionOutcome::Rendered {
            count: 1,
            source: PostsSource::Fallback
        }
    );
    assert!(run.output.contains("(showing bundled posts)"));
    assert!(run.output.contains("Kurtis Weissnat @Elwyn.Skiles"));
}

/// **VALUE**: Verifies a missing fallback file is reported, not panicked on.
#[tokio::test]
async fn given_posts_without_body_and_no_fallback_when_session_runs_then_fallback_unavailable() {
    let endpoints = CannedEndpoints::new(token("abc123"), Ok(EndpointResponse::Success(None)));
    let assets_dir = TempDir::new().unwrap();

    let run = run_session(&endpoints, &assets_dir).await;

    assert_eq!(run.outcome, SessionOutcome::FallbackUnavailable);
    assert!(run.output.contains("fallback unavailable"));
    assert!(run.output.contains(FALLBACK_FILE));
}

/// **VALUE**: Verifies an empty array from the server renders "No posts." without fallback.
#[tokio::test]
async fn given_empty_posts_array_when_session_runs_then_no_posts_rendered() {
    let endpoints = CannedEndpoints::new(token("abc123"), posts(Vec::new()));
    let assets_dir = TempDir::new().unwrap();

    let run = run_session(&endpoints, &assets_dir).await;

    assert_eq!(
        run.outcome,
        SessionOutcome::Rendered {
            count: 0,
            source: PostsSource::Network
        }
    );
    assert!(run.output.contains("No posts."));
    assert!(!run.output.contains("bundled"));
}

/// **VALUE**: Verifies a transport failure on the posts call is rendered with its message.
#[tokio::test]
async fn given_posts_transport_failure_when_session_runs_then_posts_failed() {
    let endpoints = CannedEndpoints::new(
        token("abc123"),
        Err(EndpointError::transport("connection refused")),
    );
    let assets_dir = TempDir::new().unwrap();

    let run = run_session(&endpoints, &assets_dir).await;

    assert_eq!(run.outcome, SessionOutcome::PostsFailed);
    assert!(
        run.output.contains("✗ get_all_posts failed: connection refused"),
        "Output was:\n{}",
        run.output
    );
}

/// **VALUE**: Verifies a server error on the posts call without a body renders a bare failure line.
#[tokio::test]
async fn given_posts_server_error_without_message_when_session_runs_then_bare_failure() {
    let endpoints = CannedEndpoints::new(token("abc123"), failure(500, "<html>oops</html>"));
    let assets_dir = TempDir::new().unwrap();

    let run = run_session(&endpoints, &assets_dir).await;

    assert_eq!(run.outcome, SessionOutcome::PostsFailed);
    assert!(run.output.contains("✗ get_all_posts failed\n"));
}
