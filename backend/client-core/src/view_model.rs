use crate::channel::ResponseChannel;
use crate::repository::PostsRepository;

use models::{Post, Token};

use std::sync::Arc;

/// Presentation-facing facade over [`PostsRepository`].
///
/// Returns the repository's channels untouched.
#[derive(Clone)]
pub struct PostsViewModel {
    repository: Arc<PostsRepository>,
}

impl PostsViewModel {
    pub fn new(repository: Arc<PostsRepository>) -> Self {
        Self { repository }
    }

    pub fn authentication(&self) -> ResponseChannel<Token> {
        self.repository.authentication()
    }

    pub fn get_all_posts(&self, token: &str) -> ResponseChannel<Vec<Post>> {
        self.repository.get_all_posts(token)
    }
}
