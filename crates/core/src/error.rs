use appctx_api::ResolutionError;
use appctx_plugin::DiscoveryError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppCtxError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON serialization/deserialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Discovery error: {0}")]
    Discovery(#[from] DiscoveryError),
    #[error(transparent)]
    Resolution(#[from] ResolutionError),
}

pub type Result<T> = std::result::Result<T, AppCtxError>;
