//! Explicit construction of the client stack from configuration.

use crate::config::ClientConfig;
use crate::endpoint_client::HttpEndpointClient;
use crate::error::CoreError;
use crate::repository::PostsRepository;
use crate::view_model::PostsViewModel;

use std::sync::Arc;

use log::info;

/// Build `HttpEndpointClient` → `PostsRepository` → `PostsViewModel`.
///
/// Must be called from within a tokio runtime.
pub fn build_view_model(config: &ClientConfig) -> Result<PostsViewModel, CoreError> {
    let endpoints = HttpEndpointClient::from_config(config)?;
    info!(
        "Endpoint client targeting {} (timeout {}s)",
        endpoints.base_url(),
        config.server.timeout_secs
    );

    let repository = PostsRepository::new(Arc::new(endpoints))?;

    Ok(PostsViewModel::new(Arc::new(repository)))
}
