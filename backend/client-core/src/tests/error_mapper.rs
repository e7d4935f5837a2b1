use crate::error_mapper::ErrorMapper;

/// **VALUE**: Verifies the `message` field is extracted from a failure body.
#[test]
fn given_body_with_message_when_mapped_then_returns_message() {
    let mapper = ErrorMapper;

    let message = mapper.error_message(Some(r#"{ "message": "invalid credentials" }"#));

    assert_eq!(message.as_deref(), Some("invalid credentials"));
}

/// **VALUE**: Verifies missing, empty, non-JSON and wrongly-shaped bodies all map to `None`.
///
/// **WHY THIS MATTERS**: Failure bodies are best-effort. The mapper must never
/// turn a malformed body into a second failure.
///
/// **BUG THIS CATCHES**: Would catch a mapper that propagates decode errors or
/// falls back to the raw body text.
#[test]
fn given_unusable_bodies_when_mapped_then_returns_none() {
    let mapper = ErrorMapper;

    assert_eq!(mapper.error_message(None), None);
    assert_eq!(mapper.error_message(Some("")), None);
    assert_eq!(mapper.error_message(Some("<html>Bad Gateway</html>")), None);
    assert_eq!(mapper.error_message(Some("[1, 2, 3]")), None);
    assert_eq!(mapper.error_message(Some(r#"{ "message": 42 }"#)), None);
}

/// **VALUE**: Verifies `errors` is parsed but does not stand in for `message`.
///
/// **BUG THIS CATCHES**: Would catch a silent change of which field reaches
/// `ResponseState::Error`.
#[test]
fn given_body_with_only_errors_when_mapped_then_message_is_none() {
    let mapper = ErrorMapper;
    let body = Some(r#"{ "errors": "token expired" }"#);

    let parsed = mapper.parse_error_body(body).unwrap();

    assert_eq!(parsed.errors.as_deref(), Some("token expired"));
    assert_eq!(mapper.error_message(body), None);
}
