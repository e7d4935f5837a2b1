//! Wire records exchanged with the challenge API.
//!
//! Pure data: no I/O and no business logic. `client-core` decodes responses
//! into these types and the application renders them.

pub mod error_body;
pub mod post;
pub mod token;

#[cfg(test)]
mod tests;

pub use error_body::ErrorBody;
pub use post::{Address, Company, Geo, Post};
pub use token::Token;
