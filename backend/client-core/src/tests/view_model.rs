use super::fakes::{ScriptedEndpoints, Step, sample_post};
use crate::endpoint_client::{EndpointClient, EndpointResponse};
use crate::repository::PostsRepository;
use crate::response_state::ResponseState;
use crate::view_model::PostsViewModel;

use common::HttpStatusCode;
use models::Token;

use std::sync::Arc;

use futures_util::StreamExt;

fn view_model_with(endpoints: &Arc<ScriptedEndpoints>) -> PostsViewModel {
    let endpoints: Arc<dyn EndpointClient> = endpoints.clone();
    let repository = PostsRepository::new(endpoints).unwrap();
    PostsViewModel::new(Arc::new(repository))
}

/// **VALUE**: Verifies the view-model hands back the repository's channel unchanged.
///
/// **WHY THIS MATTERS**: The view-model is a seam, not a filter. Dropping
/// `Loading` or rewriting errors here would hide states from the screen.
#[tokio::test]
async fn given_login_failure_when_authentication_via_view_model_then_states_pass_through() {
    // GIVEN: A login rejected with a message
    let endpoints = Arc::new(ScriptedEndpoints::new());
    endpoints.push_auth(Step::Respond(Ok(EndpointResponse::Failure {
        status: HttpStatusCode(403),
        body: Some(String::from(r#"{ "message": "forbidden" }"#)),
    })));
    let view_model = view_model_with(&endpoints);

    // WHEN: Observing via the view-model
    let states: Vec<ResponseState<Token>> = view_model.authentication().collect().await;

    // THEN: Loading then the repository's Error
    assert_eq!(states.len(), 2, "Got {states:?}");
    assert!(states[0].is_loading());
    assert!(matches!(&states[1], ResponseState::Error(Some(message)) if message == "forbidden"));
}

/// **VALUE**: Verifies the full login → posts flow through the view-model.
#[tokio::test]
async fn given_token_from_login_when_posts_requested_then_posts_delivered() {
    // GIVEN: A login and a listing
    let endpoints = Arc::new(ScriptedEndpoints::new());
    endpoints.push_auth(Step::Respond(Ok(EndpointResponse::Success(Some(
        Token::new("abc123"),
    )))));
    endpoints.push_posts(Step::Respond(Ok(EndpointResponse::Success(Some(vec![
        sample_post(1),
        sample_post(2),
    ])))));
    let view_model = view_model_with(&endpoints);

    // WHEN: Logging in, then fetching with the returned key
    let token = match view_model.authentication().terminal().await {
        Some(ResponseState::Success(Some(token))) => token,
        other => panic!("Expected token, got {other:?}"),
    };
    let terminal = view_model
        .get_all_posts(token.api_key.as_str())
        .terminal()
        .await;

    // THEN: Posts arrive and the key was used
    match terminal {
        Some(ResponseState::Success(Some(posts))) => assert_eq!(posts.len(), 2),
        other => panic!("Expected posts, got {other:?}"),
    }
    assert_eq!(endpoints.tokens_seen(), vec![String::from("abc123")]);
}
