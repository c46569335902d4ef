use super::WebApplicationType;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// Descriptor naming a family of environments.
///
/// The built-in kinds line up with [`WebApplicationType`]; providers may
/// declare their own with [`EnvironmentKind::new`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EnvironmentKind(Cow<'static, str>);

impl EnvironmentKind {
    pub const STANDARD: EnvironmentKind = EnvironmentKind(Cow::Borrowed("standard"));
    pub const SERVLET: EnvironmentKind = EnvironmentKind(Cow::Borrowed("servlet"));
    pub const REACTIVE: EnvironmentKind = EnvironmentKind(Cow::Borrowed("reactive"));

    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    /// The built-in kind used for an application type.
    pub const fn for_web_type(web_type: WebApplicationType) -> Self {
        match web_type {
            WebApplicationType::None => Self::STANDARD,
            WebApplicationType::Servlet => Self::SERVLET,
            WebApplicationType::Reactive => Self::REACTIVE,
        }
    }

    /// Whether this is one of the web kinds.
    pub fn is_web(&self) -> bool {
        *self == Self::SERVLET || *self == Self::REACTIVE
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for EnvironmentKind {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl From<WebApplicationType> for EnvironmentKind {
    fn from(web_type: WebApplicationType) -> Self {
        Self::for_web_type(web_type)
    }
}

impl fmt::Display for EnvironmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for EnvironmentKind {
    fn from(s: &str) -> Self {
        Self::new(s.to_string())
    }
}
