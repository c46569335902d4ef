//! Provider resolution.
//!
//! [`ProviderResolver`] polls the discovered providers in order and returns the
//! first result a provider produces. Provider order is part of the contract:
//! swapping two providers that both apply changes the outcome.
//!
//! Only [`ProviderResolver::create_context`] has a fallback and an error
//! boundary. The environment lookups have neither: they return `Ok(None)` when
//! every provider declines and pass provider errors through untouched.

use crate::context::GenericContext;
use appctx_api::{
    ApplicationContext, Environment, EnvironmentKind, NoApplicableProvider, ProviderError,
    ProviderResult, ResolutionError, ResolutionResult, WebApplicationType,
};
use appctx_plugin::{ContextProvider, ProviderDiscovery};
use std::sync::Arc;
use tracing::debug;

/// Zero-argument factory used when no provider creates a context.
pub type DefaultContextProducer =
    dyn Fn() -> Result<Box<dyn ApplicationContext>, ProviderError> + Send + Sync;

fn generic_context() -> Result<Box<dyn ApplicationContext>, ProviderError> {
    Ok(Box::new(GenericContext::new()))
}

pub struct ProviderResolver {
    discovery: Arc<dyn ProviderDiscovery>,
    default_context: Option<Arc<DefaultContextProducer>>,
}

impl ProviderResolver {
    /// Resolver that falls back to a [`GenericContext`].
    pub fn new(discovery: Arc<dyn ProviderDiscovery>) -> Self {
        Self {
            discovery,
            default_context: Some(Arc::new(generic_context)),
        }
    }

    /// Resolver with no fallback; `create_context` fails when every provider declines.
    pub fn without_default(discovery: Arc<dyn ProviderDiscovery>) -> Self {
        Self {
            discovery,
            default_context: None,
        }
    }

    pub fn with_default_context<F>(mut self, producer: F) -> Self
    where
        F: Fn() -> Result<Box<dyn ApplicationContext>, ProviderError> + Send + Sync + 'static,
    {
        self.default_context = Some(Arc::new(producer));
        self
    }

    pub fn has_default_context(&self) -> bool {
        self.default_context.is_some()
    }

    /// First environment kind any provider declares for `web_type`.
    pub fn get_environment_kind(
        &self,
        web_type: WebApplicationType,
    ) -> ProviderResult<EnvironmentKind> {
        self.poll(web_type, |p, t| p.environment_kind(t), None)
    }

    /// First environment any provider creates for `web_type`.
    pub fn create_environment(
        &self,
        web_type: WebApplicationType,
    ) -> ProviderResult<Box<dyn Environment>> {
        self.poll(web_type, |p, t| p.create_environment(t), None)
    }

    /// Create the application context for `web_type`.
    ///
    /// Falls back to the default producer when every provider declines. Any
    /// failure along the way, including the fallback's, is reported as a
    /// single [`ResolutionError`] carrying the original cause.
    pub fn create_context(
        &self,
        web_type: WebApplicationType,
    ) -> ResolutionResult<Box<dyn ApplicationContext>> {
        match self.poll(
            web_type,
            |p, t| p.create_context(t),
            self.default_context.as_deref(),
        ) {
            Ok(Some(context)) => Ok(context),
            Ok(None) => Err(ResolutionError::new(NoApplicableProvider(web_type))),
            Err(cause) => Err(ResolutionError::new(cause)),
        }
    }

    fn poll<T>(
        &self,
        web_type: WebApplicationType,
        action: impl Fn(&dyn ContextProvider, WebApplicationType) -> ProviderResult<T>,
        default: Option<&(dyn Fn() -> Result<T, ProviderError> + Send + Sync)>,
    ) -> ProviderResult<T> {
        for candidate in self.discovery.discover()? {
            if let Some(result) = action(candidate.instance.as_ref(), web_type)? {
                debug!(provider = %candidate.info.id, %web_type, "provider produced a result");
                return Ok(Some(result));
            }
        }

        match default {
            Some(produce) => {
                debug!(%web_type, "no provider applied, using default");
                produce().map(Some)
            }
            None => Ok(None),
        }
    }
}

/// A resolver can itself be registered as a provider of another resolver.
///
/// When nothing applies and there is no default it declines, and other
/// failures surface with their original cause.
impl ContextProvider for ProviderResolver {
    fn environment_kind(&self, web_type: WebApplicationType) -> ProviderResult<EnvironmentKind> {
        self.get_environment_kind(web_type)
    }

    fn create_environment(
        &self,
        web_type: WebApplicationType,
    ) -> ProviderResult<Box<dyn Environment>> {
        ProviderResolver::create_environment(self, web_type)
    }

    fn create_context(
        &self,
        web_type: WebApplicationType,
    ) -> ProviderResult<Box<dyn ApplicationContext>> {
        // Declining lets an outer resolver move on to its next candidate.
        match ProviderResolver::create_context(self, web_type) {
            Ok(context) => Ok(Some(context)),
            Err(err) if err.cause().is::<NoApplicableProvider>() => Ok(None),
            Err(err) => Err(err.into_cause()),
        }
    }
}

impl std::fmt::Debug for ProviderResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderResolver")
            .field("has_default_context", &self.has_default_context())
            .finish_non_exhaustive()
    }
}
