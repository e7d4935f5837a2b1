mod bundled_assets;
mod helpers;
mod session;
