//! Adapts endpoint outcomes into [`ResponseState`] channels.

use crate::channel::{ResponseChannel, ResponsePublisher};
use crate::endpoint_client::{EndpointClient, EndpointResponse};
use crate::error::{DispatchError, EndpointError, RepositoryError};
use crate::error_mapper::ErrorMapper;
use crate::response_state::ResponseState;

use common::{ErrorLocation, RedactedApiKey};
use models::{Post, Token};

use std::future::Future;
use std::panic::{AssertUnwindSafe, Location};
use std::sync::Arc;

use futures_util::FutureExt;
use log::{debug, info, warn};
use tokio::runtime::Handle;

pub const AUTHENTICATION_OPERATION: &str = "authentication";
pub const GET_ALL_POSTS_OPERATION: &str = "get_all_posts";

/// Runs endpoint calls on the runtime and reports each one on its own channel.
///
/// Holds no per-request state: concurrent calls get independent channels and
/// independent requests.
pub struct PostsRepository {
    endpoints: Arc<dyn EndpointClient>,
    error_mapper: ErrorMapper,
    runtime: Handle,
}

impl PostsRepository {
    /// Bind to the runtime of the calling context.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::NoRuntime`] when called outside a tokio runtime.
    #[track_caller]
    pub fn new(endpoints: Arc<dyn EndpointClient>) -> Result<Self, RepositoryError> {
        let runtime = Handle::try_current().map_err(|e| RepositoryError::NoRuntime {
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;

        Ok(Self::with_runtime(endpoints, runtime))
    }

    pub fn with_runtime(endpoints: Arc<dyn EndpointClient>, runtime: Handle) -> Self {
        Self {
            endpoints,
            error_mapper: ErrorMapper,
            runtime,
        }
    }

    /// Request a token. The channel already holds `Loading` when returned.
    pub fn authentication(&self) -> ResponseChannel<Token> {
        let endpoints = Arc::clone(&self.endpoints);

        self.dispatch(AUTHENTICATION_OPERATION, async move {
            endpoints.authenticate().await
        })
    }

    /// Request the post list with `token` as access token.
    pub fn get_all_posts(&self, token: &str) -> ResponseChannel<Vec<Post>> {
        let endpoints = Arc::clone(&self.endpoints);
        let access_token = RedactedApiKey::from(token);

        self.dispatch(GET_ALL_POSTS_OPERATION, async move {
            endpoints.fetch_posts(access_token.as_str()).await
        })
    }

    fn dispatch<T, F>(&self, operation: &'static str, call: F) -> ResponseChannel<T>
    where
        T: Send + 'static,
        F: Future<Output = Result<EndpointResponse<T>, EndpointError>> + Send + 'static,
    {
        let (publisher, channel) = ResponsePublisher::open(operation);
        let request_id = publisher.request_id();
        let error_mapper = self.error_mapper;

        debug!("[{request_id}] {operation} dispatched");

        self.runtime.spawn(async move {
            let state = match AssertUnwindSafe(call).catch_unwind().await {
                Ok(outcome) => settle_outcome(&error_mapper, outcome),
                Err(payload) => {
                    ResponseState::ThrowableError(DispatchError::from_panic(operation, &*payload))
                }
            };

            match &state {
                ResponseState::Success(data) => {
                    info!(
                        "[{request_id}] {operation} succeeded (body present: {})",
                        data.is_some()
                    );
                }
                ResponseState::Error(message) => {
                    warn!("[{request_id}] {operation} failed: {message:?}");
                }
                ResponseState::Exception(e) => {
                    warn!("[{request_id}] {operation} could not be sent: {e}");
                }
                ResponseState::ThrowableError(e) => {
                    warn!("[{request_id}] {operation} aborted: {e}");
                }
                ResponseState::Loading => {}
            }

            publisher.settle(state);
        });

        channel
    }
}

/// Map a completed endpoint call to its terminal state.
pub(crate) fn settle_outcome<T>(
    error_mapper: &ErrorMapper,
    outcome: Result<EndpointResponse<T>, EndpointError>,
) -> ResponseState<T> {
    match outcome {
        Ok(EndpointResponse::Success(data)) => ResponseState::Success(data),
        Ok(EndpointResponse::Failure { status, body }) => {
            debug!(
                "HTTP {status} {} (body present: {})",
                status.class(),
                body.is_some()
            );
            ResponseState::Error(error_mapper.error_message(body.as_deref()))
        }
        Ok(EndpointResponse::Undecodable { status, reason }) => {
            debug!("HTTP {status} body rejected: {reason}");
            ResponseState::Error(Some(reason))
        }
        Err(e) if e.is_transport() => ResponseState::Error(Some(e.message().to_string())),
        Err(e) => ResponseState::Exception(e),
    }
}
