use super::{EndpointClient, EndpointResponse};
use crate::config::ClientConfig;
use crate::error::EndpointError;

use common::{ErrorLocation, HttpStatusCode};
use models::{Post, Token};

use std::panic::Location;
use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::header::HeaderValue;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use url::Url;

const DEFAULT_TIMEOUT_DURATION: Duration = Duration::from_secs(30);
const ACCESS_TOKEN_HEADER_KEY: &str = "x-access-token";
const LOGIN_ENDPOINT: &str = "login";
const USERS_ENDPOINT: &str = "users";

/// reqwest-backed [`EndpointClient`].
///
/// Cheap to clone; clones share the connection pool.
#[derive(Clone)]
pub struct HttpEndpointClient {
    base_url: Url,
    client: Client,
}

impl HttpEndpointClient {
    pub fn new(base_url_str: &str) -> Result<Self, EndpointError> {
        Self::with_timeout(base_url_str, DEFAULT_TIMEOUT_DURATION)
    }

    /// Same timeout applies to connecting and to the whole request.
    pub fn with_timeout(base_url_str: &str, timeout: Duration) -> Result<Self, EndpointError> {
        let base_url = parse_base_url(base_url_str)?;
        let client = Client::builder()
            .connect_timeout(timeout)
            .timeout(timeout)
            .build()
            .map_err(|e| EndpointError::ClientBuild {
                message: e.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })?;

        Ok(Self { base_url, client })
    }

    pub fn from_config(config: &ClientConfig) -> Result<Self, EndpointError> {
        Self::with_timeout(&config.server.base_url, config.timeout())
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    async fn send<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<EndpointResponse<T>, EndpointError> {
        let response = request.send().await?;
        let status = HttpStatusCode::from(response.status().as_u16());
        let text = response.text().await?;

        debug!("HTTP {status} ({} bytes)", text.len());

        Ok(interpret_body(status, text))
    }
}

#[async_trait]
impl EndpointClient for HttpEndpointClient {
    async fn authenticate(&self) -> Result<EndpointResponse<Token>, EndpointError> {
        let url = self.base_url.join(LOGIN_ENDPOINT)?;
        debug!("GET {url}");

        self.send(self.client.get(url)).await
    }

    async fn fetch_posts(
        &self,
        access_token: &str,
    ) -> Result<EndpointResponse<Vec<Post>>, EndpointError> {
        let url = self.base_url.join(USERS_ENDPOINT)?;

        let mut header_value =
            HeaderValue::from_str(access_token).map_err(|e| EndpointError::InvalidHeader {
                header: ACCESS_TOKEN_HEADER_KEY,
                message: e.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })?;
        header_value.set_sensitive(true);

        debug!("GET {url}");

        self.send(
            self.client
                .get(url)
                .header(ACCESS_TOKEN_HEADER_KEY, header_value),
        )
        .await
    }
}

/// `Url::join` drops the last path segment unless the base ends with `/`.
#[track_caller]
fn parse_base_url(base_url_str: &str) -> Result<Url, EndpointError> {
    let base_url = if base_url_str.ends_with('/') {
        Url::parse(base_url_str)?
    } else {
        Url::parse(&format!("{base_url_str}/"))?
    };

    Ok(base_url)
}

/// Classify a response body by status, then decode 2xx bodies.
pub(crate) fn interpret_body<T: DeserializeOwned>(
    status: HttpStatusCode,
    text: String,
) -> EndpointResponse<T> {
    let trimmed = text.trim();

    if !status.is_success() {
        let body = if trimmed.is_empty() { None } else { Some(text) };
        return EndpointResponse::Failure { status, body };
    }

    if trimmed.is_empty() || trimmed == "null" {
        return EndpointResponse::Success(None);
    }

    match serde_json::from_str::<T>(trimmed) {
        Ok(data) => EndpointResponse::Success(Some(data)),
        Err(e) => EndpointResponse::Undecodable {
            status,
            reason: format!("Failed to decode response body: {e}"),
        },
    }
}
