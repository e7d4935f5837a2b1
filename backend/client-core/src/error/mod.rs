pub mod assets;
pub mod config;
pub mod dispatch;
pub mod endpoint;
pub mod repository;

pub use assets::AssetError;
pub use config::ConfigError;
pub use dispatch::DispatchError;
pub use endpoint::EndpointError;
pub use repository::RepositoryError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Endpoint(#[from] endpoint::EndpointError),

    #[error(transparent)]
    Repository(#[from] repository::RepositoryError),

    #[error(transparent)]
    Config(#[from] config::ConfigError),

    #[error(transparent)]
    Asset(#[from] assets::AssetError),
}
