use appctx_api::{ApplicationContext, WebApplicationType};
use std::any::Any;

/// Application context backed by an embedded web server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebServerContext {
    id: String,
    display_name: String,
    web_type: WebApplicationType,
}

impl WebServerContext {
    pub fn new(web_type: WebApplicationType) -> Self {
        let id = format!("application-{}", web_type);
        Self {
            display_name: format!("WebServerContext[{}]", id),
            id,
            web_type,
        }
    }

    pub fn web_type(&self) -> WebApplicationType {
        self.web_type
    }
}

impl ApplicationContext for WebServerContext {
    fn id(&self) -> &str {
        &self.id
    }

    fn display_name(&self) -> &str {
        &self.display_name
    }

    fn web_application_type(&self) -> Option<WebApplicationType> {
        Some(self.web_type)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
