use common::ErrorLocation;

use std::panic::Location;

use thiserror::Error as ThisError;

/// Failures of an endpoint call that never produced an HTTP response.
///
/// `Transport` means the request left (or tried to leave) the process;
/// every other variant is a local failure before anything was sent.
#[derive(Debug, Clone, ThisError)]
pub enum EndpointError {
    #[error("Transport Error: {message} {location}")]
    Transport {
        message: String,
        is_timeout: bool,
        is_connect: bool,
        location: ErrorLocation,
    },

    #[error("URL Parse Error: {message} {location}")]
    UrlParse {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid Header Error: {header}: {message} {location}")]
    InvalidHeader {
        header: &'static str,
        message: String,
        location: ErrorLocation,
    },

    #[error("Client Build Error: {message} {location}")]
    ClientBuild {
        message: String,
        location: ErrorLocation,
    },
}

impl EndpointError {
    /// Transport failure carrying only a message, as a fake transport would report it.
    #[track_caller]
    pub fn transport(message: impl Into<String>) -> Self {
        EndpointError::Transport {
            message: message.into(),
            is_timeout: false,
            is_connect: false,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Raw message without the variant prefix or location suffix.
    pub fn message(&self) -> &str {
        match self {
            EndpointError::Transport { message, .. }
            | EndpointError::UrlParse { message, .. }
            | EndpointError::InvalidHeader { message, .. }
            | EndpointError::ClientBuild { message, .. } => message,
        }
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, EndpointError::Transport { .. })
    }
}

impl From<url::ParseError> for EndpointError {
    #[track_caller]
    fn from(error: url::ParseError) -> Self {
        EndpointError::UrlParse {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<reqwest::Error> for EndpointError {
    #[track_caller]
    fn from(error: reqwest::Error) -> Self {
        EndpointError::Transport {
            message: error.to_string(),
            is_timeout: error.is_timeout(),
            is_connect: error.is_connect(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
