use common::RedactedApiKey;

use serde::Deserialize;

/// Credential returned by `GET login`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Token {
    pub api_key: RedactedApiKey,
}

impl Token {
    pub fn new(api_key: &str) -> Self {
        Self {
            api_key: RedactedApiKey::from(api_key),
        }
    }
}
