use client_core::error::{ConfigError, CoreError};

use common::ErrorLocation;

use std::panic::Location;

use thiserror::Error;

/// Errors surfaced by the terminal application.
///
/// Request failures are not errors here: they arrive as `ResponseState`
/// values and are rendered. These cover setup and output problems.
#[derive(Debug, Error)]
pub enum KongapostsError {
    /// Error from this App
    #[error("Kongaposts Error: {message} {location}")]
    Kongaposts {
        message: String,
        location: ErrorLocation,
    },

    /// Error from client-core setup (config, wiring)
    #[error("Core Error: {message} {location}")]
    Core {
        message: String,
        location: ErrorLocation,
    },

    /// Writing to the output failed
    #[error("Render Error: {message} {location}")]
    Render {
        message: String,
        location: ErrorLocation,
    },
}

impl From<CoreError> for KongapostsError {
    #[track_caller]
    fn from(error: CoreError) -> Self {
        KongapostsError::Core {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<ConfigError> for KongapostsError {
    #[track_caller]
    fn from(error: ConfigError) -> Self {
        KongapostsError::Core {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<std::io::Error> for KongapostsError {
    #[track_caller]
    fn from(error: std::io::Error) -> Self {
        KongapostsError::Render {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
