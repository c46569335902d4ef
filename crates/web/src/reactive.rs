use crate::{WEB_TYPE_PROPERTY, WebServerContext};
use appctx_api::{
    ApplicationContext, Environment, EnvironmentKind, ProviderResult, WebApplicationType,
};
use appctx_core::StandardEnvironment;
use appctx_plugin::{ContextProvider, ProviderInfo};

pub const REACTIVE_PROVIDER_ID: &str = "reactive";

pub struct ReactiveProvider {
    _private: (),
}

impl ReactiveProvider {
    pub fn new() -> Self {
        Self { _private: () }
    }

    pub fn info() -> ProviderInfo {
        ProviderInfo::new(REACTIVE_PROVIDER_ID, "Reactive web server")
            .with_description("Reactive web application contexts")
    }

    fn applies(web_type: WebApplicationType) -> bool {
        web_type == WebApplicationType::Reactive
    }
}

impl Default for ReactiveProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl ContextProvider for ReactiveProvider {
    fn environment_kind(&self, web_type: WebApplicationType) -> ProviderResult<EnvironmentKind> {
        Ok(Self::applies(web_type).then(|| EnvironmentKind::for_web_type(web_type)))
    }

    fn create_environment(
        &self,
        web_type: WebApplicationType,
    ) -> ProviderResult<Box<dyn Environment>> {
        if !Self::applies(web_type) {
            return Ok(None);
        }
        let env = StandardEnvironment::of_kind(EnvironmentKind::for_web_type(web_type))
            .with_property(WEB_TYPE_PROPERTY, web_type.as_str());
        Ok(Some(Box::new(env)))
    }

    fn create_context(
        &self,
        web_type: WebApplicationType,
    ) -> ProviderResult<Box<dyn ApplicationContext>> {
        if !Self::applies(web_type) {
            return Ok(None);
        }
        tracing::debug!("creating reactive web server context");
        Ok(Some(Box::new(WebServerContext::new(web_type))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reactive_only() {
        let provider = ReactiveProvider::new();

        assert_eq!(
            provider
                .environment_kind(WebApplicationType::Reactive)
                .unwrap(),
            Some(EnvironmentKind::REACTIVE)
        );
        for ty in [WebApplicationType::None, WebApplicationType::Servlet] {
            assert!(provider.environment_kind(ty).unwrap().is_none());
            assert!(provider.create_environment(ty).unwrap().is_none());
            assert!(provider.create_context(ty).unwrap().is_none());
        }
    }

    #[test]
    fn test_reactive_artifacts() {
        let provider = ReactiveProvider::new();
        let ty = WebApplicationType::Reactive;

        let env = provider.create_environment(ty).unwrap().unwrap();
        assert_eq!(env.kind(), EnvironmentKind::REACTIVE);
        assert_eq!(env.property(WEB_TYPE_PROPERTY), Some("reactive"));

        let ctx = provider.create_context(ty).unwrap().unwrap();
        assert_eq!(ctx.id(), "application-reactive");
        assert_eq!(ctx.web_application_type(), Some(ty));
    }
}
