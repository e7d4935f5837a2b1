use common::ErrorLocation;

use std::any::Any;
use std::panic::Location;

use thiserror::Error as ThisError;

/// Failures of the task that runs an endpoint call, as opposed to the call itself.
#[derive(Debug, Clone, ThisError)]
pub enum DispatchError {
    #[error("Dispatch Panicked: {operation}: {message} {location}")]
    Panicked {
        operation: &'static str,
        message: String,
        location: ErrorLocation,
    },
}

impl DispatchError {
    /// Build from a payload returned by `catch_unwind`.
    #[track_caller]
    pub fn from_panic(operation: &'static str, payload: &(dyn Any + Send)) -> Self {
        let message = if let Some(text) = payload.downcast_ref::<&str>() {
            (*text).to_string()
        } else if let Some(text) = payload.downcast_ref::<String>() {
            text.clone()
        } else {
            String::from("non-string panic payload")
        };

        DispatchError::Panicked {
            operation,
            message,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn message(&self) -> &str {
        match self {
            DispatchError::Panicked { message, .. } => message,
        }
    }
}
