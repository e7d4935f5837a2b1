use kongaposts::error::KongapostsError;
use kongaposts::logger::initialize as LoggerInitialize;
use kongaposts::paths::{AppPaths, BUNDLED_ASSETS_DIR, base_url_override, load_dotenv};
use kongaposts::presenter::Presenter;
use kongaposts::session::PostsSession;

use client_core::assets::FsAssetReader;
use client_core::config::ClientConfig;
use client_core::wiring::build_view_model;

use common::ErrorLocation;

use std::fs::create_dir_all;
use std::io::stdout;
use std::panic::Location;
use std::path::PathBuf;
use std::process::ExitCode;

use log::info;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<bool, KongapostsError> {
    let dotenv_path = load_dotenv();
    let paths = AppPaths::detect();

    create_dir_all(&paths.log_dir).map_err(|e| KongapostsError::Kongaposts {
        message: format!("Failed to create log directory: {}", e),
        location: ErrorLocation::from(Location::caller()),
    })?;

    // Initialize logger FIRST
    LoggerInitialize(&paths.log_dir)?;

    info!("kongaposts starting");
    info!("Log directory: {}", paths.log_dir.display());
    if let Some(path) = dotenv_path {
        info!("Loaded .env from: {}", path.display());
    }

    let mut config = ClientConfig::load(&paths.config_dir)?;
    if let Some(base_url) = base_url_override() {
        config.server.base_url = base_url;
        config.validate()?;
    }

    let view_model = build_view_model(&config)?;

    let assets_dir = config
        .assets
        .directory
        .clone()
        .unwrap_or_else(|| PathBuf::from(BUNDLED_ASSETS_DIR));
    let assets = FsAssetReader::new(assets_dir);
    info!("Fallback assets in {}", assets.root().display());

    let session = PostsSession::new(&view_model, &assets, &config.assets.fallback_posts_file);
    let mut presenter = Presenter::new(stdout().lock());
    let outcome = session.run(&mut presenter).await?;

    info!("Session finished: {outcome:?}");
    Ok(outcome.is_rendered())
}
