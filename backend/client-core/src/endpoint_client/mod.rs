//! Raw access to the challenge API.
//!
//! [`EndpointClient`] is the seam the repository depends on; production code
//! uses [`HttpEndpointClient`], tests substitute their own implementations.

pub(crate) mod http;

pub use http::HttpEndpointClient;

use crate::error::EndpointError;

use common::HttpStatusCode;
use models::{Post, Token};

use async_trait::async_trait;

/// Outcome of an HTTP exchange that produced a response.
#[derive(Debug, Clone)]
pub enum EndpointResponse<T> {
    /// 2xx. `None` when the body was empty or `null`.
    Success(Option<T>),

    /// Non-2xx, with the raw body if one was sent.
    Failure {
        status: HttpStatusCode,
        body: Option<String>,
    },

    /// 2xx whose body did not decode into the expected shape.
    Undecodable {
        status: HttpStatusCode,
        reason: String,
    },
}

#[async_trait]
pub trait EndpointClient: Send + Sync {
    /// `GET login`
    async fn authenticate(&self) -> Result<EndpointResponse<Token>, EndpointError>;

    /// `GET users` with `x-access-token: {access_token}`.
    async fn fetch_posts(
        &self,
        access_token: &str,
    ) -> Result<EndpointResponse<Vec<Post>>, EndpointError>;
}
