//! Shared building blocks for the kongaposts workspace.
//!
//! Everything here is domain-agnostic: error location capture, a redacting
//! wrapper for credentials, and a typed HTTP status code.
//!
//! ## Architecture
//!
//! - **common** (this crate): Cross-cutting primitives
//! - **models**: Wire records (posts, token, error body)
//! - **client-core**: Endpoint client, response states, repository, view-model
//! - **kongaposts**: Terminal application wiring everything together

pub mod error;
pub mod http_status;
pub mod redacted_key;

#[cfg(test)]
mod tests;

pub use error::error_location::ErrorLocation;
pub use error::redact_error::RedactError;
pub use http_status::HttpStatusCode;
pub use redacted_key::RedactedApiKey;
