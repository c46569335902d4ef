//! Resolver configuration.
//!
//! Loaded from a JSON file; every field is optional. Environment variables
//! override the file: `APPCTX_MANIFEST` (a path list, split like `PATH`)
//! replaces `manifests`, `APPCTX_FALLBACK` replaces `fallback`.

use crate::error::{AppCtxError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const MANIFEST_ENV: &str = "APPCTX_MANIFEST";
pub const FALLBACK_ENV: &str = "APPCTX_FALLBACK";

/// What `create_context` does when every provider declines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FallbackPolicy {
    /// Build a plain generic context.
    #[default]
    Baseline,
    /// Fail with a resolution error.
    None,
}

impl std::str::FromStr for FallbackPolicy {
    type Err = AppCtxError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "baseline" => Ok(Self::Baseline),
            "none" => Ok(Self::None),
            other => Err(AppCtxError::Config(format!(
                "invalid fallback policy '{}', expected 'baseline' or 'none'",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Provider manifests, read in order. Empty means every built-in provider.
    pub manifests: Vec<PathBuf>,
    /// Provider ids to leave out of the built-in set.
    pub disabled_providers: Vec<String>,
    pub fallback: FallbackPolicy,
}

impl ResolverConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Load `path` if given, then apply overrides from the process environment.
    pub fn resolve(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        config.with_overrides(|key| std::env::var_os(key))
    }

    /// Apply overrides read through `lookup`.
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<std::ffi::OsString>,
    {
        if let Some(raw) = lookup(MANIFEST_ENV) {
            self.manifests = std::env::split_paths(&raw)
                .filter(|p| !p.as_os_str().is_empty())
                .collect();
        }
        if let Some(raw) = lookup(FALLBACK_ENV) {
            let raw = raw.into_string().map_err(|_| {
                AppCtxError::Config(format!("{} is not valid unicode", FALLBACK_ENV))
            })?;
            self.fallback = raw.parse()?;
        }
        Ok(self)
    }

    pub fn is_disabled(&self, provider_id: &str) -> bool {
        self.disabled_providers.iter().any(|id| id == provider_id)
    }
}
