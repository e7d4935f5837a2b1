use client_core::assets::{FsAssetReader, load_fallback_posts};

use kongaposts::paths::BUNDLED_ASSETS_DIR;

/// **VALUE**: Verifies the shipped fallback listing decodes.
///
/// **BUG THIS CATCHES**: Would catch a hand edit to `assets/DummyPost.json`
/// that breaks the post shape, which only shows up when the server sends no body.
#[test]
fn given_bundled_assets_when_fallback_loaded_then_posts_decode() {
    // GIVEN: The assets directory shipped with the crate
    let reader = FsAssetReader::new(BUNDLED_ASSETS_DIR);

    // WHEN: Loading the fallback listing
    let posts = load_fallback_posts(&reader, "DummyPost.json").unwrap();

    // THEN: Non-empty, with avatars
    assert!(!posts.is_empty());
    assert!(posts.iter().all(|p| !p.avatar.is_empty()));
}
