use appctx_core::config::{FallbackPolicy, ResolverConfig};
use appctx_core::{ManifestDiscovery, ProviderCatalog, ProviderResolver, StaticDiscovery};
use appctx_plugin::ProviderDiscovery;
use appctx_web::{ReactiveProvider, ServletProvider};
use std::sync::Arc;

/// Catalog of every provider shipped with appctx, in default resolution order.
pub fn default_catalog() -> ProviderCatalog {
    let mut catalog = ProviderCatalog::new();
    catalog.register(ServletProvider::info(), || Arc::new(ServletProvider::new()));
    catalog.register(ReactiveProvider::info(), || Arc::new(ReactiveProvider::new()));
    catalog
}

/// Discovery described by `config`.
///
/// Manifests take precedence; without them every built-in provider that is not
/// disabled is used in catalog order.
pub fn build_discovery(config: &ResolverConfig) -> Arc<dyn ProviderDiscovery> {
    let catalog = default_catalog();

    if !config.manifests.is_empty() {
        tracing::debug!(manifests = ?config.manifests, "using manifest discovery");
        return Arc::new(ManifestDiscovery::new(
            config.manifests.clone(),
            Arc::new(catalog),
        ));
    }

    let providers = catalog
        .instantiate_all()
        .into_iter()
        .filter(|handle| {
            let disabled = config.is_disabled(&handle.info.id);
            if disabled {
                tracing::debug!(provider = %handle.info.id, "provider disabled by configuration");
            }
            !disabled
        })
        .collect();
    Arc::new(StaticDiscovery::with_providers(providers))
}

/// Bootstraps a resolver with the built-in providers as described by `config`.
pub fn build_default_resolver(config: &ResolverConfig) -> ProviderResolver {
    let discovery = build_discovery(config);
    match config.fallback {
        FallbackPolicy::Baseline => ProviderResolver::new(discovery),
        FallbackPolicy::None => ProviderResolver::without_default(discovery),
    }
}

/// Initializes the logging system for a specific component.
/// This delegates to the core logging module.
pub fn init_logging(component: &str, to_stderr: bool) -> Option<impl Drop> {
    Some(appctx_core::logging::init_logging(component, to_stderr))
}
