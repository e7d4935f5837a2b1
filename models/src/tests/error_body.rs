use crate::ErrorBody;

/// **VALUE**: Verifies both optional fields may be absent.
///
/// **BUG THIS CATCHES**: Would catch a required field making `{}` undecodable,
/// which would turn every terse failure into `Error(None)`.
#[test]
fn given_partial_bodies_when_deserialized_then_missing_fields_are_none() {
    let only_message: ErrorBody =
        serde_json::from_str(r#"{ "message": "invalid credentials" }"#).unwrap();
    let only_errors: ErrorBody = serde_json::from_str(r#"{ "errors": "token expired" }"#).unwrap();
    let empty: ErrorBody = serde_json::from_str("{}").unwrap();

    assert_eq!(only_message.message.as_deref(), Some("invalid credentials"));
    assert_eq!(only_message.errors, None);
    assert_eq!(only_errors.errors.as_deref(), Some("token expired"));
    assert_eq!(empty, ErrorBody::default());
}
