use crate::ProviderHandle;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum DiscoveryError {
    #[error("Failed to read provider manifest {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Malformed provider manifest {path} at line {line}: {message}")]
    Manifest {
        path: PathBuf,
        line: usize,
        message: String,
    },
    #[error("Unknown provider '{0}' listed in manifest")]
    UnknownProvider(String),
}

/// Locates the ordered set of context providers.
///
/// Called once per resolution; the returned order decides which provider wins.
pub trait ProviderDiscovery: Send + Sync {
    fn discover(&self) -> Result<Vec<ProviderHandle>, DiscoveryError>;
}
