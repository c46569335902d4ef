use crate::models::WebApplicationType;
use std::any::Any;
use std::fmt::Debug;

/// A fully constructed application context.
pub trait ApplicationContext: Debug + Send + Sync {
    /// Unique id of this context.
    fn id(&self) -> &str;

    /// Human readable name, defaults to the id.
    fn display_name(&self) -> &str {
        self.id()
    }

    /// The web application type this context was built for, if it is web-aware.
    fn web_application_type(&self) -> Option<WebApplicationType> {
        None
    }

    /// Access the concrete context type.
    fn as_any(&self) -> &dyn Any;
}
