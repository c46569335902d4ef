use crate::models::WebApplicationType;

/// Error raised by a provider or a discovery adapter.
pub type ProviderError = Box<dyn std::error::Error + Send + Sync>;

/// The single failure surfaced when no application context could be created.
///
/// Carries the original cause; this is the only operation that wraps errors.
#[derive(Debug, thiserror::Error)]
#[error(
    "Unable to create a default application context instance, you may need a custom context provider"
)]
pub struct ResolutionError {
    #[source]
    source: ProviderError,
}

impl ResolutionError {
    pub fn new(source: impl Into<ProviderError>) -> Self {
        Self {
            source: source.into(),
        }
    }

    /// The error that prevented context creation.
    pub fn cause(&self) -> &(dyn std::error::Error + Send + Sync + 'static) {
        self.source.as_ref()
    }

    pub fn into_cause(self) -> ProviderError {
        self.source
    }
}

/// Every provider declined and there was no default to fall back to.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("No provider produced an application context for web application type '{0}'")]
pub struct NoApplicableProvider(pub WebApplicationType);

pub type ResolutionResult<T> = std::result::Result<T, ResolutionError>;
pub type ProviderResult<T> = std::result::Result<Option<T>, ProviderError>;
