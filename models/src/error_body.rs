use serde::{Deserialize, Serialize};

/// Body the challenge API sends with non-2xx responses.
///
/// Both fields are optional; servers routinely omit one or both.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub errors: Option<String>,
}
