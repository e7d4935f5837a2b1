//! Canned endpoint client for driving whole sessions without a server.

use async_trait::async_trait;

use client_core::endpoint_client::{EndpointClient, EndpointResponse};
use client_core::error::EndpointError;
use client_core::repository::PostsRepository;
use client_core::view_model::PostsViewModel;

use common::HttpStatusCode;
use models::{Post, Token};

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

pub type AuthReply = Result<EndpointResponse<Token>, EndpointError>;
pub type PostsReply = Result<EndpointResponse<Vec<Post>>, EndpointError>;

/// Answers every call with the same canned reply and counts posts calls.
pub struct CannedEndpoints {
    auth: AuthReply,
    posts: PostsReply,
    posts_calls: AtomicUsize,
    tokens_seen: Mutex<Vec<String>>,
}

impl CannedEndpoints {
    pub fn new(auth: AuthReply, posts: PostsReply) -> Arc<Self> {
        Arc::new(Self {
            auth,
            posts,
            posts_calls: AtomicUsize::new(0),
            tokens_seen: Mutex::new(Vec::new()),
        })
    }

    pub fn posts_calls(&self) -> usize {
        self.posts_calls.load(Ordering::SeqCst)
    }

    pub fn tokens_seen(&self) -> Vec<String> {
        self.tokens_seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl EndpointClient for CannedEndpoints {
    async fn authenticate(&self) -> Result<EndpointResponse<Token>, EndpointError> {
        self.auth.clone()
    }

    async fn fetch_posts(
        &self,
        access_token: &str,
    ) -> Result<EndpointResponse<Vec<Post>>, EndpointError> {
        self.posts_calls.fetch_add(1, Ordering::SeqCst);
        self.tokens_seen
            .lock()
            .unwrap()
            .push(access_token.to_string());
        self.posts.clone()
    }
}

pub fn view_model(endpoints: &Arc<CannedEndpoints>) -> PostsViewModel {
    let endpoints: Arc<dyn EndpointClient> = endpoints.clone();
    let repository = PostsRepository::new(endpoints).expect("inside a tokio runtime");
    PostsViewModel::new(Arc::new(repository))
}

pub fn token(key: &str) -> AuthReply {
    Ok(EndpointResponse::Success(Some(Token::new(key))))
}

pub fn failure<T>(status: u16, body: &str) -> Result<EndpointResponse<T>, EndpointError> {
    Ok(EndpointResponse::Failure {
        status: HttpStatusCode::from(status),
        body: Some(body.to_string()),
    })
}

pub fn posts(items: Vec<Post>) -> PostsReply {
    Ok(EndpointResponse::Success(Some(items)))
}

pub fn post(id: u64, name: &str, username: &str) -> Post {
    serde_json::from_value(serde_json::json!({
        "id": id,
        "name": name,
        "username": username,
        "email": format!("{username}@example.com"),
        "avatar": format!("https://i.pravatar.cc/150?u={id}"),
    }))
    .expect("valid post json")
}
