use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Marker advertising that a servlet API is available.
pub const SERVLET_API_MARKER: &str = "servlet-api";
/// Marker advertising a configurable web application context.
pub const WEB_CONTEXT_MARKER: &str = "web-context";
/// Marker advertising the servlet-based request dispatcher.
pub const SERVLET_DISPATCHER_MARKER: &str = "servlet-dispatcher";
/// Marker advertising the reactive request dispatcher.
pub const REACTIVE_DISPATCHER_MARKER: &str = "reactive-dispatcher";
/// Marker advertising a JAX-RS servlet container.
pub const JERSEY_MARKER: &str = "jersey";

const SERVLET_MARKERS: &[&str] = &[SERVLET_API_MARKER, WEB_CONTEXT_MARKER];

/// The kind of application being started.
///
/// This is the closed category key every provider is polled with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WebApplicationType {
    /// Not a web application; no embedded server.
    None,
    /// A servlet-based web application.
    Servlet,
    /// A reactive web application.
    Reactive,
}

impl WebApplicationType {
    pub const ALL: [WebApplicationType; 3] = [Self::None, Self::Servlet, Self::Reactive];

    /// Infer the application type from the capability markers that are available.
    ///
    /// Reactive wins only when its dispatcher is present and neither the servlet
    /// dispatcher nor a jersey container is. Otherwise every servlet marker has
    /// to be present for a servlet application.
    pub fn deduce<'a, I>(markers: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let markers: Vec<&str> = markers.into_iter().collect();
        let present = |marker: &str| markers.contains(&marker);

        if present(REACTIVE_DISPATCHER_MARKER)
            && !present(SERVLET_DISPATCHER_MARKER)
            && !present(JERSEY_MARKER)
        {
            return Self::Reactive;
        }
        if SERVLET_MARKERS.iter().any(|m| !present(*m)) {
            return Self::None;
        }
        Self::Servlet
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Servlet => "servlet",
            Self::Reactive => "reactive",
        }
    }
}

impl fmt::Display for WebApplicationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown web application type: {0}")]
pub struct ParseWebApplicationTypeError(pub String);

impl FromStr for WebApplicationType {
    type Err = ParseWebApplicationTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" => Ok(Self::None),
            "servlet" => Ok(Self::Servlet),
            "reactive" => Ok(Self::Reactive),
            other => Err(ParseWebApplicationTypeError(other.to_string())),
        }
    }
}
