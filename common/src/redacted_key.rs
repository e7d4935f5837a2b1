//! Secure API key handling with redacted Debug output.

use crate::{ErrorLocation, RedactError};

use std::fmt;
use std::panic::Location;

use serde::de::Deserializer;
use serde::ser::Error;
use zeroize::Zeroize;

/// An API key that never exposes its value in logs or debug output.
///
/// The login endpoint hands one of these back as `api_key`; it is then sent
/// verbatim in the `x-access-token` header of the posts request.
#[derive(Clone, PartialEq, Eq)]
pub struct RedactedApiKey {
    inner: String,
}

impl RedactedApiKey {
    /// Create a new redacted API key.
    pub fn new(key: String) -> Self {
        Self { inner: key }
    }

    /// Get the actual key value for transmission.
    ///
    /// # Security Note
    /// Only call this when actually sending the key to the server.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Get the key length (safe to log).
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Check if the key is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl From<&str> for RedactedApiKey {
    fn from(key: &str) -> Self {
        Self::new(key.to_string())
    }
}

impl fmt::Debug for RedactedApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RedactedApiKey([REDACTED])")
    }
}

impl fmt::Display for RedactedApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[REDACTED API KEY]")
    }
}

impl Drop for RedactedApiKey {
    fn drop(&mut self) {
        self.inner.zeroize();
    }
}

// Prevent accidental serialization
impl serde::Serialize for RedactedApiKey {
    #[track_caller]
    fn serialize<S>(&self, _serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        Err(S::Error::custom(RedactError::Serialization {
            message: String::from("RedactedApiKey cannot be serialized - use as_str() explicitly"),
            location: ErrorLocation::from(Location::caller()),
        }))
    }
}

impl<'de> serde::Deserialize<'de> for RedactedApiKey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let key = String::deserialize(deserializer)?;
        Ok(Self::new(key))
    }
}
