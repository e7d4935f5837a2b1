//! Text rendering of response states and posts.

use crate::error::KongapostsError;

use client_core::error::{DispatchError, EndpointError};
use models::Post;

use std::io::Write;

/// Where a rendered listing came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostsSource {
    Network,
    Fallback,
}

/// Writes screen output for a posts session to any [`Write`] sink.
pub struct Presenter<W: Write> {
    out: W,
}

impl<W: Write> Presenter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn loading(&mut self, operation: &str) -> Result<(), KongapostsError> {
        writeln!(self.out, "… {operation}")?;
        Ok(())
    }

    pub fn error(&mut self, operation: &str, message: Option<&str>) -> Result<(), KongapostsError> {
        match message {
            Some(message) => writeln!(self.out, "✗ {operation} failed: {message}")?,
            None => writeln!(self.out, "✗ {operation} failed")?,
        }
        Ok(())
    }

    pub fn exception(
        &mut self,
        operation: &str,
        error: &EndpointError,
    ) -> Result<(), KongapostsError> {
        writeln!(
            self.out,
            "✗ {operation} could not be sent: {}",
            error.message()
        )?;
        Ok(())
    }

    pub fn throwable(
        &mut self,
        operation: &str,
        error: &DispatchError,
    ) -> Result<(), KongapostsError> {
        writeln!(self.out, "✗ {operation} aborted: {}", error.message())?;
        Ok(())
    }

    pub fn missing_token(&mut self) -> Result<(), KongapostsError> {
        writeln!(self.out, "✗ authentication returned no token")?;
        Ok(())
    }

    pub fn fallback_unavailable(&mut self, reason: &str) -> Result<(), KongapostsError> {
        writeln!(self.out, "✗ no posts from server and fallback unavailable: {reason}")?;
        Ok(())
    }

    pub fn posts(&mut self, posts: &[Post], source: PostsSource) -> Result<(), KongapostsError> {
        if source == PostsSource::Fallback {
            writeln!(self.out, "(showing bundled posts)")?;
        }

        if posts.is_empty() {
            writeln!(self.out, "No posts.")?;
            return Ok(());
        }

        for post in posts {
            self.post(post)?;
        }
        Ok(())
    }

    fn post(&mut self, post: &Post) -> Result<(), KongapostsError> {
        writeln!(self.out)?;
        writeln!(self.out, "{} {}", post.name, post.handle())?;
        writeln!(self.out, "  {} · {}", post.email, post.phone)?;
        if !post.website.is_empty() {
            writeln!(self.out, "  {}", post.website)?;
        }
        if !post.company.name.is_empty() {
            writeln!(
                self.out,
                "  {}: \"{}\"",
                post.company.name, post.company.catch_phrase
            )?;
        }
        if !post.address.city.is_empty() {
            writeln!(self.out, "  {}", post.address.city)?;
        }
        if !post.avatar.is_empty() {
            writeln!(self.out, "  avatar: {}", post.avatar)?;
        }
        Ok(())
    }
}
