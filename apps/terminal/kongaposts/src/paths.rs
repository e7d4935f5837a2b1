//! Where the application keeps its config, logs and bundled assets.
//!
//! Lookup order for each directory:
//! 1. Environment variable override (`KONGAPOSTS_CONFIG_DIR`, `KONGAPOSTS_LOG_DIR`)
//! 2. Platform-specific directory via `dirs` crate
//! 3. Current directory

use std::env;
use std::path::PathBuf;

use log::{debug, info, warn};

pub const APP_DIR_NAME: &str = "kongaposts";
pub const CONFIG_DIR_ENV: &str = "KONGAPOSTS_CONFIG_DIR";
pub const LOG_DIR_ENV: &str = "KONGAPOSTS_LOG_DIR";
pub const BASE_URL_ENV: &str = "KONGAPOSTS_BASE_URL";
const LOG_SUBDIR_NAME: &str = "logs";

/// Assets shipped next to the crate sources.
pub const BUNDLED_ASSETS_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/assets");

/// Resolved application directories.
#[derive(Debug, Clone)]
pub struct AppPaths {
    pub config_dir: PathBuf,
    pub log_dir: PathBuf,
}

impl AppPaths {
    pub fn detect() -> Self {
        let config_dir = env::var(CONFIG_DIR_ENV)
            .map(PathBuf::from)
            .ok()
            .or_else(|| dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME)))
            .unwrap_or_else(|| PathBuf::from("."));

        let log_dir = env::var(LOG_DIR_ENV)
            .map(PathBuf::from)
            .ok()
            .or_else(|| {
                dirs::data_local_dir().map(|dir| dir.join(APP_DIR_NAME).join(LOG_SUBDIR_NAME))
            })
            .unwrap_or_else(|| PathBuf::from(LOG_SUBDIR_NAME));

        Self {
            config_dir,
            log_dir,
        }
    }
}

/// Load `.env` from the current directory, then next to the executable.
///
/// Returns the path that was loaded, if any. Runs before the logger exists,
/// so results are only logged by the caller.
pub fn load_dotenv() -> Option<PathBuf> {
    if let Ok(path) = dotenvy::dotenv() {
        return Some(path);
    }

    let exe_path = env::current_exe().ok()?;
    let env_path = exe_path.parent()?.join(".env");
    if env_path.exists() && dotenvy::from_path(&env_path).is_ok() {
        return Some(env_path);
    }

    None
}

/// Base URL override from the environment, ignoring blank values.
pub fn base_url_override() -> Option<String> {
    match env::var(BASE_URL_ENV) {
        Ok(value) if !value.trim().is_empty() => {
            info!("Using {BASE_URL_ENV} override: {value}");
            Some(value.trim().to_string())
        }
        Ok(_) => {
            warn!("{BASE_URL_ENV} is set but blank, ignoring");
            None
        }
        Err(_) => {
            debug!("No {BASE_URL_ENV} override");
            None
        }
    }
}
