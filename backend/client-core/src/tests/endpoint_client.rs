use crate::endpoint_client::http::interpret_body;
use crate::endpoint_client::{EndpointResponse, HttpEndpointClient};
use crate::error::EndpointError;

use common::HttpStatusCode;
use models::{Post, Token};

/// **VALUE**: Verifies a 2xx body decodes into the expected payload.
#[test]
fn given_ok_status_and_token_body_when_interpreted_then_success_with_token() {
    let outcome: EndpointResponse<Token> =
        interpret_body(HttpStatusCode(200), String::from(r#"{"api_key":"abc123"}"#));

    match outcome {
        EndpointResponse::Success(Some(token)) => assert_eq!(token, Token::new("abc123")),
        other => panic!("Expected Success(Some), got {other:?}"),
    }
}

/// **VALUE**: Verifies empty and `null` 2xx bodies are reported as absent payloads.
///
/// **WHY THIS MATTERS**: The posts screen relies on `Success(None)` to switch
/// to its bundled fallback listing.
///
/// **BUG THIS CATCHES**: Would catch `null` being reported as a decode failure.
#[test]
fn given_ok_status_and_empty_or_null_body_when_interpreted_then_success_none() {
    for body in ["", "   ", "null", " null\n"] {
        let outcome: EndpointResponse<Vec<Post>> =
            interpret_body(HttpStatusCode(200), body.to_string());

        assert!(
            matches!(outcome, EndpointResponse::Success(None)),
            "Body {body:?} should be absent, got {outcome:?}"
        );
    }
}

/// **VALUE**: Verifies a 2xx body of the wrong shape is reported, not swallowed.
///
/// **BUG THIS CATCHES**: Would catch decode errors turning into `Success(None)`.
#[test]
fn given_ok_status_and_wrong_shape_when_interpreted_then_undecodable() {
    let outcome: EndpointResponse<Vec<Post>> =
        interpret_body(HttpStatusCode(200), String::from(r#"{"api_key":"abc123"}"#));

    match outcome {
        EndpointResponse::Undecodable { status, reason } => {
            assert_eq!(status, HttpStatusCode(200));
            assert!(reason.contains("decode"), "Got: {reason}");
        }
        other => panic!("Expected Undecodable, got {other:?}"),
    }
}

/// **VALUE**: Verifies non-2xx responses keep their raw body and status.
#[test]
fn given_error_status_when_interpreted_then_failure_with_raw_body() {
    let outcome: EndpointResponse<Token> = interpret_body(
        HttpStatusCode(400),
        String::from(r#"{"message":"invalid credentials"}"#),
    );

    match outcome {
        EndpointResponse::Failure { status, body } => {
            assert_eq!(status, HttpStatusCode(400));
            assert_eq!(body.as_deref(), Some(r#"{"message":"invalid credentials"}"#));
        }
        other => panic!("Expected Failure, got {other:?}"),
    }

    let empty: EndpointResponse<Token> = interpret_body(HttpStatusCode(500), String::new());
    assert!(matches!(
        empty,
        EndpointResponse::Failure { body: None, .. }
    ));
}

/// **VALUE**: Verifies the base URL gains a trailing slash so endpoint paths append.
///
/// **WHY THIS MATTERS**: `Url::join("login")` on `.../challenge/api` would
/// produce `.../challenge/login` and every call would 404.
#[test]
fn given_base_url_without_trailing_slash_when_client_created_then_slash_appended() {
    let client = HttpEndpointClient::new("https://engineering.league.dev/challenge/api").unwrap();

    assert_eq!(
        client.base_url().as_str(),
        "https://engineering.league.dev/challenge/api/"
    );
    assert_eq!(
        client.base_url().join("login").unwrap().as_str(),
        "https://engineering.league.dev/challenge/api/login"
    );
}

/// **VALUE**: Verifies an unparseable base URL is a local error, not a panic.
#[test]
fn given_invalid_base_url_when_client_created_then_url_parse_error() {
    let result = HttpEndpointClient::new("not a url");

    assert!(
        matches!(result, Err(EndpointError::UrlParse { .. })),
        "Expected UrlParse error"
    );
}
