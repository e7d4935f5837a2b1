//! Local fallback payloads.
//!
//! The posts screen falls back to a bundled JSON listing when the posts call
//! succeeds without a body. Reading files is behind [`AssetReader`] so the
//! presentation layer can supply its own storage.

use crate::error::AssetError;

use common::ErrorLocation;
use models::Post;

use std::panic::Location;
use std::path::{Path, PathBuf};

use log::{debug, warn};

pub trait AssetReader: Send + Sync {
    /// Whole file as text, or `None` if it cannot be read.
    fn read_text(&self, file_name: &str) -> Option<String>;
}

/// [`AssetReader`] over a directory on disk.
#[derive(Debug, Clone)]
pub struct FsAssetReader {
    root: PathBuf,
}

impl FsAssetReader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl AssetReader for FsAssetReader {
    fn read_text(&self, file_name: &str) -> Option<String> {
        let path = self.root.join(file_name);

        match std::fs::read_to_string(&path) {
            Ok(text) => {
                debug!("Read asset {} ({} bytes)", path.display(), text.len());
                Some(text)
            }
            Err(e) => {
                warn!("Failed to read asset {}: {e}", path.display());
                None
            }
        }
    }
}

/// Decode the fallback post listing stored under `file_name`.
///
/// # Errors
///
/// - [`AssetError::NotFound`] if the reader has nothing for `file_name`
/// - [`AssetError::Parse`] if the contents are not a JSON array of posts
#[track_caller]
pub fn load_fallback_posts(
    reader: &dyn AssetReader,
    file_name: &str,
) -> Result<Vec<Post>, AssetError> {
    let text = reader
        .read_text(file_name)
        .ok_or_else(|| AssetError::NotFound {
            file_name: file_name.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;

    serde_json::from_str(&text).map_err(|e| AssetError::Parse {
        file_name: file_name.to_string(),
        reason: e.to_string(),
        location: ErrorLocation::from(Location::caller()),
    })
}
