use crate::RedactedApiKey;

/// **VALUE**: Verifies the key never appears in Debug or Display output.
///
/// **WHY THIS MATTERS**: Tokens travel through `ResponseState` values that get
/// logged with `{:?}`. A leak here leaks credentials into log files.
///
/// **BUG THIS CATCHES**: Would catch a derived `Debug` replacing the manual impl.
#[test]
fn given_api_key_when_formatted_then_value_is_redacted() {
    // GIVEN: A key
    let key = RedactedApiKey::new(String::from("abc123"));

    // WHEN: Formatting with Debug and Display
    let debug = format!("{key:?}");
    let display = format!("{key}");

    // THEN: Neither contains the secret
    assert!(!debug.contains("abc123"), "Debug leaked key: {debug}");
    assert!(!display.contains("abc123"), "Display leaked key: {display}");
    assert_eq!(key.as_str(), "abc123");
    assert_eq!(key.len(), 6);
}

/// **VALUE**: Verifies the login payload's `api_key` string deserializes into the wrapper.
///
/// **BUG THIS CATCHES**: Would catch if deserialization expected a struct
/// instead of a bare string.
#[test]
fn given_json_string_when_deserialized_then_wraps_value() {
    // GIVEN: A JSON string
    let json = "\"abc123\"";

    // WHEN: Deserializing
    let key: RedactedApiKey = serde_json::from_str(json).unwrap();

    // THEN: Value is preserved and comparable
    assert_eq!(key, RedactedApiKey::from("abc123"));
}

/// **VALUE**: Verifies that serializing a key fails instead of writing it out.
///
/// **BUG THIS CATCHES**: Would catch a derived `Serialize` sneaking in.
#[test]
fn given_api_key_when_serialized_then_returns_error() {
    // GIVEN: A key
    let key = RedactedApiKey::from("abc123");

    // WHEN: Serializing
    let result = serde_json::to_string(&key);

    // THEN: Refused
    assert!(result.is_err(), "Serialization should be refused");
    let message = result.unwrap_err().to_string();
    assert!(message.contains("cannot be serialized"), "Got: {message}");
}
