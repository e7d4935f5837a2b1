use crate::CHALLENGE_API_BASE_URL;
use crate::config::ClientConfig;
use crate::error::ConfigError;

use std::time::Duration;

use tempfile::TempDir;

/// **VALUE**: Verifies a missing config file yields defaults.
///
/// **WHY THIS MATTERS**: First run has no config; the client must still reach
/// the public challenge API.
#[test]
fn given_no_config_file_when_loaded_then_defaults_returned() {
    let dir = TempDir::new().unwrap();

    let config = ClientConfig::load(dir.path()).unwrap();

    assert_eq!(config.server.base_url, CHALLENGE_API_BASE_URL);
    assert_eq!(config.timeout(), Duration::from_secs(30));
    assert_eq!(config.assets.fallback_posts_file, "DummyPost.json");
    assert!(config.assets.directory.is_none());
}

/// **VALUE**: Verifies save → load keeps user values.
#[test]
fn given_saved_config_when_loaded_then_values_preserved() {
    // GIVEN: A customized config saved to disk
    let dir = TempDir::new().unwrap();
    let mut config = ClientConfig::default();
    config.server.base_url = String::from("http://127.0.0.1:8080/challenge/api/");
    config.server.timeout_secs = 5;
    config.save(dir.path()).unwrap();

    // WHEN: Loading it back
    let loaded = ClientConfig::load(dir.path()).unwrap();

    // THEN: Values survive and no temp file is left behind
    assert_eq!(loaded.server.base_url, "http://127.0.0.1:8080/challenge/api/");
    assert_eq!(loaded.server.timeout_secs, 5);
    assert!(!dir.path().join("config.json.tmp").exists());
}

/// **VALUE**: Verifies a partial config file is completed with defaults.
#[test]
fn given_partial_config_when_loaded_then_missing_fields_defaulted() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("config.json"),
        r#"{ "server": { "timeout_secs": 10 } }"#,
    )
    .unwrap();

    let config = ClientConfig::load(dir.path()).unwrap();

    assert_eq!(config.server.timeout_secs, 10);
    assert_eq!(config.server.base_url, CHALLENGE_API_BASE_URL);
    assert_eq!(config.version, 1);
}

/// **VALUE**: Verifies a corrupt config file is an error, not silently replaced.
#[test]
fn given_corrupt_config_when_loaded_then_parse_error() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("config.json"), "{ not json").unwrap();

    let result = ClientConfig::load(dir.path());

    assert!(matches!(result, Err(ConfigError::ParseError { .. })));
}

/// **VALUE**: Verifies invalid values are rejected.
///
/// **BUG THIS CATCHES**: Would catch a zero timeout (every request fails
/// instantly) or a non-HTTP base URL slipping through.
#[test]
fn given_invalid_values_when_validated_then_validation_error() {
    let mut bad_url = ClientConfig::default();
    bad_url.server.base_url = String::from("ftp://engineering.league.dev/");

    let mut zero_timeout = ClientConfig::default();
    zero_timeout.server.timeout_secs = 0;

    let mut future_version = ClientConfig::default();
    future_version.version = 99;

    let mut empty_fallback = ClientConfig::default();
    empty_fallback.assets.fallback_posts_file = String::from("  ");

    for config in [bad_url, zero_timeout, future_version, empty_fallback] {
        assert!(
            matches!(config.validate(), Err(ConfigError::ValidationError { .. })),
            "Should reject {config:?}"
        );
    }
}

/// **VALUE**: Verifies an invalid config is never written.
#[test]
fn given_invalid_config_when_saved_then_nothing_written() {
    let dir = TempDir::new().unwrap();
    let mut config = ClientConfig::default();
    config.server.timeout_secs = 0;

    let result = config.save(dir.path());

    assert!(result.is_err());
    assert!(!dir.path().join("config.json").exists());
}
