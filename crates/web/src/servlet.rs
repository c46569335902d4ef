use crate::{WEB_TYPE_PROPERTY, WebServerContext};
use appctx_api::{
    ApplicationContext, Environment, EnvironmentKind, ProviderResult, WebApplicationType,
};
use appctx_core::StandardEnvironment;
use appctx_plugin::{ContextProvider, ProviderInfo};

pub const SERVLET_PROVIDER_ID: &str = "servlet";

pub struct ServletProvider {
    _private: (),
}

impl ServletProvider {
    pub fn new() -> Self {
        Self { _private: () }
    }

    pub fn info() -> ProviderInfo {
        ProviderInfo::new(SERVLET_PROVIDER_ID, "Servlet web server")
            .with_description("Servlet based web application contexts")
    }

    fn applies(web_type: WebApplicationType) -> bool {
        web_type == WebApplicationType::Servlet
    }
}

impl Default for ServletProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl ContextProvider for ServletProvider {
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
        tracing::debug!("creating servlet web server context");
        Ok(Some(Box::new(WebServerContext::new(web_type))))
    }
}
