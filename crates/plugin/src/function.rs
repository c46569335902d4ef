use crate::ContextProvider;
use appctx_api::{ApplicationContext, ProviderResult, WebApplicationType};

/// Provider that always creates its context through a closure, whatever the
/// application type.
pub struct FnProvider<F> {
    supplier: F,
}

impl<F> FnProvider<F>
where
    F: Fn() -> Box<dyn ApplicationContext> + Send + Sync,
{
    pub fn new(supplier: F) -> Self {
        Self { supplier }
    }
}

impl<F> ContextProvider for FnProvider<F>
where
    F: Fn() -> Box<dyn ApplicationContext> + Send + Sync,
{
    fn create_context(
        &self,
        _web_type: WebApplicationType,
    ) -> ProviderResult<Box<dyn ApplicationContext>> {
        Ok(Some((self.supplier)()))
    }
}
