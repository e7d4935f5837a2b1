use models::ErrorBody;

use log::debug;

/// Best-effort decoding of failure bodies.
///
/// Stateless; never fails. Anything that is not an [`ErrorBody`] yields `None`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ErrorMapper;

impl ErrorMapper {
    pub fn parse_error_body(&self, body: Option<&str>) -> Option<ErrorBody> {
        let body = body?;

        match serde_json::from_str::<ErrorBody>(body) {
            Ok(error_body) => Some(error_body),
            Err(e) => {
                debug!("Failure body is not an error document: {e}");
                None
            }
        }
    }

    /// The `message` field of the failure body, if any.
    pub fn error_message(&self, body: Option<&str>) -> Option<String> {
        self.parse_error_body(body).and_then(|error_body| error_body.message)
    }
}
