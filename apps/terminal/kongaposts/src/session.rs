//! One pass through the posts screen: authenticate, fetch, render.

use crate::error::KongapostsError;
use crate::presenter::{PostsSource, Presenter};

use client_core::ResponseChannel;
use client_core::ResponseState;
use client_core::assets::{AssetReader, load_fallback_posts};
use client_core::view_model::PostsViewModel;

use std::io::Write;

use log::{info, warn};

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    Rendered { count: usize, source: PostsSource },
    AuthenticationFailed,
    MissingToken,
    PostsFailed,
    FallbackUnavailable,
}

impl SessionOutcome {
    pub fn is_rendered(&self) -> bool {
        matches!(self, SessionOutcome::Rendered { .. })
    }
}

/// What an observed channel ended with, after rendering its failure states.
enum Observed<T> {
    Data(Option<T>),
    Failed,
}

/// Drives one session against `view_model`, rendering through `presenter`.
pub struct PostsSession<'a> {
    view_model: &'a PostsViewModel,
    assets: &'a dyn AssetReader,
    fallback_posts_file: &'a str,
}

impl<'a> PostsSession<'a> {
    pub fn new(
        view_model: &'a PostsViewModel,
        assets: &'a dyn AssetReader,
        fallback_posts_file: &'a str,
    ) -> Self {
        Self {
            view_model,
            assets,
            fallback_posts_file,
        }
    }

    pub async fn run<W: Write>(
        &self,
        presenter: &mut Presenter<W>,
    ) -> Result<SessionOutcome, KongapostsError> {
        let token = match observe(self.view_model.authentication(), presenter).await? {
            Observed::Data(Some(token)) => token,
            Observed::Data(None) => {
                presenter.missing_token()?;
                return Ok(SessionOutcome::MissingToken);
            }
            Observed::Failed => return Ok(SessionOutcome::AuthenticationFailed),
        };

        let channel = self.view_model.get_all_posts(token.api_key.as_str());

        let (posts, source) = match observe(channel, presenter).await? {
            Observed::Data(Some(posts)) => (posts, PostsSource::Network),
            Observed::Data(None) => {
                info!("Server sent no posts, using {}", self.fallback_posts_file);
                match load_fallback_posts(self.assets, self.fallback_posts_file) {
                    Ok(posts) => (posts, PostsSource::Fallback),
                    Err(e) => {
                        warn!("Fallback posts unavailable: {e}");
                        presenter.fallback_unavailable(&e.to_string())?;
                        return Ok(SessionOutcome::FallbackUnavailable);
                    }
                }
            }
            Observed::Failed => return Ok(SessionOutcome::PostsFailed),
        };

        presenter.posts(&posts, source)?;

        Ok(SessionOutcome::Rendered {
            count: posts.len(),
            source,
        })
    }
}

/// Render each state of `channel` and return its payload on success.
async fn observe<T, W: Write>(
    mut channel: ResponseChannel<T>,
    presenter: &mut Presenter<W>,
) -> Result<Observed<T>, KongapostsError> {
    let operation = channel.operation();

    while let Some(state) = channel.recv().await {
        match state {
            ResponseState::Loading => presenter.loading(operation)?,
            ResponseState::Success(data) => return Ok(Observed::Data(data)),
            ResponseState::Error(message) => {
                presenter.error(operation, message.as_deref())?;
                return Ok(Observed::Failed);
            }
            ResponseState::Exception(e) => {
                presenter.exception(operation, &e)?;
                return Ok(Observed::Failed);
            }
            ResponseState::ThrowableError(e) => {
                presenter.throwable(operation, &e)?;
                return Ok(Observed::Failed);
            }
        }
    }

    warn!(
        "[{}] {operation} channel closed without a terminal state",
        channel.request_id()
    );
    presenter.error(operation, None)?;
    Ok(Observed::Failed)
}
