pub mod assets;
pub mod channel;
pub mod config;
pub mod endpoint_client;
pub mod error;
pub mod error_mapper;
pub mod repository;
pub mod response_state;
pub mod view_model;
pub mod wiring;

#[cfg(test)]
mod tests;

pub use channel::ResponseChannel;
pub use response_state::ResponseState;

pub const CHALLENGE_API_HOSTNAME: &str = "engineering.league.dev";
pub const CHALLENGE_API_BASE_URL: &str =
    const_format::concatcp!("https://", CHALLENGE_API_HOSTNAME, "/challenge/api/");
