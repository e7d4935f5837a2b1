use super::fakes::sample_post;
use crate::assets::{AssetReader, FsAssetReader, load_fallback_posts};
use crate::error::AssetError;

use tempfile::TempDir;

/// **VALUE**: Verifies the fallback listing is read and decoded from disk.
#[test]
fn given_posts_file_when_fallback_loaded_then_posts_decoded() {
    // GIVEN: A directory with a posts file
    let dir = TempDir::new().unwrap();
    let posts = vec![sample_post(1), sample_post(2), sample_post(3)];
    std::fs::write(
        dir.path().join("DummyPost.json"),
        serde_json::to_string(&posts).unwrap(),
    )
    .unwrap();
    let reader = FsAssetReader::new(dir.path());

    // WHEN: Loading the fallback
    let loaded = load_fallback_posts(&reader, "DummyPost.json").unwrap();

    // THEN: Same posts, same order
    assert_eq!(loaded, posts);
}

/// **VALUE**: Verifies a missing file reads as `None` and loads as `NotFound`.
///
/// **BUG THIS CATCHES**: Would catch an I/O error escaping as a panic.
#[test]
fn given_missing_file_when_read_then_none_and_not_found() {
    let dir = TempDir::new().unwrap();
    let reader = FsAssetReader::new(dir.path());

    assert!(reader.read_text("DummyPost.json").is_none());
    assert!(matches!(
        load_fallback_posts(&reader, "DummyPost.json"),
        Err(AssetError::NotFound { .. })
    ));
}

/// **VALUE**: Verifies a corrupt fallback file is reported as a parse error.
#[test]
fn given_corrupt_file_when_fallback_loaded_then_parse_error() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("DummyPost.json"), "{ not json").unwrap();
    let reader = FsAssetReader::new(dir.path());

    let result = load_fallback_posts(&reader, "DummyPost.json");

    match result {
        Err(AssetError::Parse { file_name, .. }) => assert_eq!(file_name, "DummyPost.json"),
        other => panic!("Expected Parse error, got {other:?}"),
    }
}
