use crate::HttpStatusCode;

/// **VALUE**: Verifies status ranges used to classify endpoint outcomes.
///
/// **BUG THIS CATCHES**: Off-by-one range bounds (e.g. treating 300 as success).
#[test]
fn given_status_codes_when_classified_then_ranges_are_exclusive() {
    assert!(HttpStatusCode(200).is_success());
    assert!(HttpStatusCode(299).is_success());
    assert!(!HttpStatusCode(300).is_success());

    assert!(HttpStatusCode(400).is_client_error());
    assert!(HttpStatusCode(499).is_client_error());
    assert!(!HttpStatusCode(500).is_client_error());

    assert!(HttpStatusCode(503).is_server_error());
    assert!(!HttpStatusCode(404).is_server_error());
}

#[test]
fn given_status_code_when_displayed_then_prints_number() {
    assert_eq!(HttpStatusCode::from(401).to_string(), "401");
}

/// **VALUE**: Verifies the label attached to failure log lines.
///
/// **BUG THIS CATCHES**: Would catch a 3xx or 1xx being logged as a client or
/// server error.
#[test]
fn given_status_codes_when_class_requested_then_label_matches_range() {
    assert_eq!(HttpStatusCode(204).class(), "success");
    assert_eq!(HttpStatusCode(401).class(), "client error");
    assert_eq!(HttpStatusCode(502).class(), "server error");
    assert_eq!(HttpStatusCode(302).class(), "unexpected status");
}
