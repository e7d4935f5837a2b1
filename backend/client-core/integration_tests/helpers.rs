//! Shared fixtures for the HTTP-level integration tests.

use serde_json::{Value, json};
use wiremock::MockServer;

/// Base URL the client should use against a mock server.
pub fn api_base_url(server: &MockServer) -> String {
    format!("{}/challenge/api/", server.uri())
}

pub fn post_json(id: u64) -> Value {
    json!({
        "id": id,
        "name": format!("User {id}"),
        "username": format!("user{id}"),
        "email": format!("user{id}@example.com"),
        "phone": "1-770-736-8031 x56442",
        "website": "hildegard.org",
        "avatar": format!("https://i.pravatar.cc/150?u={id}"),
        "company": {
            "name": "Romaguera-Crona",
            "catchPhrase": "Multi-layered client-server neural-net",
            "bs": "harness real-time e-markets"
        },
        "address": {
            "street": "Kulas Light",
            "suite": "Apt. 556",
            "city": "Gwenborough",
            "zipcode": "92998-3874",
            "geo": { "lat": "-37.3159", "lng": "81.1496" }
        }
    })
}
