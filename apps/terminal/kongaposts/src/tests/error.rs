// Unit tests for error conversions

use crate::error::KongapostsError;

use client_core::error::{ConfigError, CoreError, RepositoryError};

use common::ErrorLocation;

use std::panic::Location;

/// **VALUE**: Verifies core errors keep their message when converted.
///
/// **WHY THIS MATTERS**: Setup failures are printed once at exit; losing the
/// inner message would leave the user with "Core Error" and nothing else.
#[test]
fn given_core_error_when_converted_then_message_preserved() {
    // GIVEN: A repository error wrapped in CoreError
    let core = CoreError::from(RepositoryError::NoRuntime {
        message: String::from("must be called from the context of a Tokio runtime"),
        location: ErrorLocation::from(Location::caller()),
    });

    // WHEN: Converting
    let err = KongapostsError::from(core);

    // THEN: Core variant with inner text
    assert!(matches!(err, KongapostsError::Core { .. }));
    assert!(err.to_string().contains("Tokio runtime"));
}

/// **VALUE**: Verifies config validation failures map to the Core variant.
#[test]
fn given_config_error_when_converted_then_core_variant() {
    let config = ConfigError::ValidationError {
        location: ErrorLocation::from(Location::caller()),
        reason: String::from("Invalid timeout: 0s"),
    };

    let err = KongapostsError::from(config);

    assert!(matches!(err, KongapostsError::Core { .. }));
    assert!(err.to_string().contains("Invalid timeout"));
}

/// **VALUE**: Verifies I/O failures while writing output map to Render.
#[test]
fn given_io_error_when_converted_then_render_variant() {
    let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");

    let err = KongapostsError::from(io);

    assert!(matches!(err, KongapostsError::Render { .. }));
}
