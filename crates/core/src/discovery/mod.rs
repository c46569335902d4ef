//! Discovery adapters that hand the resolver its ordered providers.

pub mod catalog;
pub mod manifest;

pub use catalog::ProviderCatalog;
pub use manifest::{ManifestDiscovery, PROVIDER_KEY, parse_manifest};

use appctx_plugin::{
    ContextProvider, DiscoveryError, ProviderDiscovery, ProviderHandle, ProviderInfo,
};
use std::sync::Arc;

/// In-memory registry; providers are returned in registration order.
#[derive(Debug, Default, Clone)]
pub struct StaticDiscovery {
    providers: Vec<ProviderHandle>,
}

impl StaticDiscovery {
    pub fn new() -> Self {
        Self {
            providers: Vec::new(),
        }
    }

    pub fn with_providers(providers: Vec<ProviderHandle>) -> Self {
        Self { providers }
    }

    pub fn register(&mut self, handle: ProviderHandle) {
        self.providers.push(handle);
    }

    pub fn register_provider(&mut self, info: ProviderInfo, provider: Arc<dyn ContextProvider>) {
        self.register(ProviderHandle::new(info, provider));
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}

impl ProviderDiscovery for StaticDiscovery {
    fn discover(&self) -> Result<Vec<ProviderHandle>, DiscoveryError> {
        Ok(self.providers.clone())
    }
}
