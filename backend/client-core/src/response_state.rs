//! Lifecycle of one asynchronous request as seen by an observer.

use crate::error::{DispatchError, EndpointError};

/// State published on a [`ResponseChannel`](crate::channel::ResponseChannel).
///
/// Every channel carries exactly one `Loading` followed by exactly one of the
/// other four variants.
#[derive(Debug, Clone)]
pub enum ResponseState<T> {
    /// Request dispatched, nothing known yet.
    Loading,

    /// 2xx. The payload is `None` when the server sent no body.
    Success(Option<T>),

    /// Non-2xx, undecodable 2xx, or transport failure.
    Error(Option<String>),

    /// The request could not be built locally.
    Exception(EndpointError),

    /// The task running the request failed underneath it.
    ThrowableError(DispatchError),
}

impl<T> ResponseState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, ResponseState::Loading)
    }

    pub fn is_terminal(&self) -> bool {
        !self.is_loading()
    }

    /// Variant name for log lines; never includes the payload.
    pub fn kind(&self) -> &'static str {
        match self {
            ResponseState::Loading => "Loading",
            ResponseState::Success(_) => "Success",
            ResponseState::Error(_) => "Error",
            ResponseState::Exception(_) => "Exception",
            ResponseState::ThrowableError(_) => "ThrowableError",
        }
    }
}
