use crate::models::EnvironmentKind;
use std::fmt::Debug;

/// A configured environment produced for a web application type.
pub trait Environment: Debug + Send + Sync {
    /// The family this environment belongs to.
    fn kind(&self) -> EnvironmentKind;

    /// Look up a property value by key.
    fn property(&self, key: &str) -> Option<&str>;

    /// Profiles activated in this environment, in activation order.
    fn active_profiles(&self) -> Vec<String> {
        Vec::new()
    }
}
