use appctx_api::{
    ApplicationContext, Environment, EnvironmentKind, ProviderResult, WebApplicationType,
};
use std::sync::Arc;

pub mod discovery;
pub mod function;

pub use discovery::{DiscoveryError, ProviderDiscovery};
pub use function::FnProvider;

/// Metadata for a provider (provider's own information).
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ProviderInfo {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
}

impl ProviderInfo {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// A discovered provider together with its metadata.
#[derive(Clone)]
pub struct ProviderHandle {
    pub info: ProviderInfo,
    pub instance: Arc<dyn ContextProvider>,
}

impl ProviderHandle {
    pub fn new(info: ProviderInfo, instance: Arc<dyn ContextProvider>) -> Self {
        Self { info, instance }
    }
}

impl std::fmt::Debug for ProviderHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderHandle")
            .field("info", &self.info)
            .finish_non_exhaustive()
    }
}

/// A candidate that may produce artifacts for a web application type.
///
/// Every operation returns `Ok(None)` when the provider does not apply, which
/// defers to the next candidate. Implementors override only what they support.
pub trait ContextProvider: Send + Sync {
    /// The environment family to use for the given application type.
    fn environment_kind(&self, _web_type: WebApplicationType) -> ProviderResult<EnvironmentKind> {
        Ok(None)
    }

    /// Create the environment instance for the given application type.
    fn create_environment(
        &self,
        _web_type: WebApplicationType,
    ) -> ProviderResult<Box<dyn Environment>> {
        Ok(None)
    }

    /// Create the application context for the given application type.
    fn create_context(
        &self,
        _web_type: WebApplicationType,
    ) -> ProviderResult<Box<dyn ApplicationContext>> {
        Ok(None)
    }
}
