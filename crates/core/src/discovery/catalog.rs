use appctx_plugin::{ContextProvider, ProviderHandle, ProviderInfo};
use indexmap::IndexMap;
use std::sync::Arc;

type Constructor = Arc<dyn Fn() -> Arc<dyn ContextProvider> + Send + Sync>;

struct CatalogEntry {
    info: ProviderInfo,
    constructor: Constructor,
}

/// Maps provider ids to constructors so a manifest can name providers
/// without linking against them directly.
#[derive(Default)]
pub struct ProviderCatalog {
    entries: IndexMap<String, CatalogEntry>,
}

impl ProviderCatalog {
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Register a constructor under `info.id`. A later registration with the
    /// same id replaces the earlier one in place.
    pub fn register<F>(&mut self, info: ProviderInfo, constructor: F)
    where
        F: Fn() -> Arc<dyn ContextProvider> + Send + Sync + 'static,
    {
        self.entries.insert(
            info.id.clone(),
            CatalogEntry {
                info,
                constructor: Arc::new(constructor),
            },
        );
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    /// Build a fresh provider instance for `id`.
    pub fn instantiate(&self, id: &str) -> Option<ProviderHandle> {
        self.entries
            .get(id)
            .map(|entry| ProviderHandle::new(entry.info.clone(), (entry.constructor)()))
    }

    /// Instantiate every registered provider in registration order.
    pub fn instantiate_all(&self) -> Vec<ProviderHandle> {
        self.entries
            .values()
            .map(|entry| ProviderHandle::new(entry.info.clone(), (entry.constructor)()))
            .collect()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl std::fmt::Debug for ProviderCatalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.entries.keys()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct Noop;
    impl ContextProvider for Noop {}

    #[test]
    fn test_instantiate_builds_fresh_instances() {
        let built = Arc::new(AtomicUsize::new(0));
        let counter = built.clone();

        let mut catalog = ProviderCatalog::new();
        catalog.register(ProviderInfo::new("noop", "Noop"), move || {
            counter.fetch_add(1, Ordering::SeqCst);
            Arc::new(Noop)
        });

        assert!(catalog.contains("noop"));
        assert!(catalog.instantiate("noop").is_some());
        assert!(catalog.instantiate("noop").is_some());
        assert!(catalog.instantiate("missing").is_none());
        assert_eq!(built.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_reregister_keeps_position() {
        let mut catalog = ProviderCatalog::new();
        catalog.register(ProviderInfo::new("a", "A"), || Arc::new(Noop));
        catalog.register(ProviderInfo::new("b", "B"), || Arc::new(Noop));
        catalog.register(ProviderInfo::new("a", "A2"), || Arc::new(Noop));

        assert_eq!(catalog.ids().collect::<Vec<_>>(), vec!["a", "b"]);
        let names: Vec<_> = catalog
            .instantiate_all()
            .into_iter()
            .map(|h| h.info.name)
            .collect();
        assert_eq!(names, vec!["A2", "B"]);
    }
}
