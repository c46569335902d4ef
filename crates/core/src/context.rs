//! Baseline context and environment types.
//!
//! [`GenericContext`] is what the resolver falls back to when no provider
//! applies. [`StandardEnvironment`] is the property-backed environment that
//! providers can build on.

use appctx_api::{ApplicationContext, Environment, EnvironmentKind};
use indexmap::IndexMap;
use std::any::Any;

/// Property holding the comma separated list of active profiles.
pub const ACTIVE_PROFILES_PROPERTY: &str = "appctx.profiles.active";

pub const DEFAULT_CONTEXT_ID: &str = "application";

/// Plain application context with no web awareness.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenericContext {
    id: String,
    display_name: String,
}

impl GenericContext {
    pub fn new() -> Self {
        Self::with_id(DEFAULT_CONTEXT_ID)
    }

    pub fn with_id(id: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            display_name: format!("GenericContext[{}]", id),
            id,
        }
    }
}

impl Default for GenericContext {
    fn default() -> Self {
        Self::new()
    }
}

impl ApplicationContext for GenericContext {
    fn id(&self) -> &str {
        &self.id
    }

    fn display_name(&self) -> &str {
        &self.display_name
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Environment backed by an ordered property map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StandardEnvironment {
    kind: EnvironmentKind,
    properties: IndexMap<String, String>,
}

impl StandardEnvironment {
    pub fn new() -> Self {
        Self::of_kind(EnvironmentKind::STANDARD)
    }

    pub fn of_kind(kind: EnvironmentKind) -> Self {
        Self {
            kind,
            properties: IndexMap::new(),
        }
    }

    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_property(key, value);
        self
    }

    /// Set a property, replacing any previous value but keeping its position.
    pub fn set_property(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.properties.insert(key.into(), value.into());
    }

    pub fn properties(&self) -> impl Iterator<Item = (&str, &str)> {
        self.properties
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl Default for StandardEnvironment {
    fn default() -> Self {
        Self::new()
    }
}

impl Environment for StandardEnvironment {
    fn kind(&self) -> EnvironmentKind {
        self.kind.clone()
    }

    fn property(&self, key: &str) -> Option<&str> {
        self.properties.get(key).map(String::as_str)
    }

    fn active_profiles(&self) -> Vec<String> {
        self.property(ACTIVE_PROFILES_PROPERTY)
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|p| !p.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default()
    }
}
