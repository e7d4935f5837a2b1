use common::ErrorLocation;

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum AssetError {
    #[error("Asset Not Found Error: {file_name} {location}")]
    NotFound {
        file_name: String,
        location: ErrorLocation,
    },

    #[error("Asset Parse Error: {file_name}: {reason} {location}")]
    Parse {
        file_name: String,
        reason: String,
        location: ErrorLocation,
    },
}
