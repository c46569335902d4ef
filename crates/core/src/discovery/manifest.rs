//! Manifest-driven discovery.
//!
//! A manifest is a properties file. The value of [`PROVIDER_KEY`] is a comma
//! separated list of provider ids, looked up in a [`ProviderCatalog`]:
//!
//! ```text
//! # built-in web providers
//! appctx.ContextProvider=\
//!   servlet,\
//!   reactive
//! ```

use super::ProviderCatalog;
use appctx_plugin::{DiscoveryError, ProviderDiscovery, ProviderHandle};
use indexmap::IndexSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Manifest key listing context provider ids.
pub const PROVIDER_KEY: &str = "appctx.ContextProvider";

/// Reads the manifests on every call so edits are picked up without restart.
#[derive(Debug, Clone)]
pub struct ManifestDiscovery {
    manifests: Vec<PathBuf>,
    catalog: Arc<ProviderCatalog>,
}

impl ManifestDiscovery {
    pub fn new(manifests: Vec<PathBuf>, catalog: Arc<ProviderCatalog>) -> Self {
        Self { manifests, catalog }
    }

    pub fn manifests(&self) -> &[PathBuf] {
        &self.manifests
    }

    /// Collect provider ids from all manifests, first occurrence wins.
    pub fn provider_ids(&self) -> Result<Vec<String>, DiscoveryError> {
        let mut ids = IndexSet::new();
        for path in &self.manifests {
            let content = std::fs::read_to_string(path).map_err(|source| DiscoveryError::Io {
                path: path.clone(),
                source,
            })?;
            ids.extend(parse_manifest(path, &content)?);
        }
        Ok(ids.into_iter().collect())
    }
}

impl ProviderDiscovery for ManifestDiscovery {
    fn discover(&self) -> Result<Vec<ProviderHandle>, DiscoveryError> {
        let ids = self.provider_ids()?;
        tracing::trace!(?ids, "discovered providers from manifests");

        ids.into_iter()
            .map(|id| {
                self.catalog
                    .instantiate(&id)
                    .ok_or(DiscoveryError::UnknownProvider(id))
            })
            .collect()
    }
}

/// Parse the provider ids listed under [`PROVIDER_KEY`] in `content`.
///
/// `path` is only used for error reporting. Repeated keys accumulate.
pub fn parse_manifest(path: &Path, content: &str) -> Result<Vec<String>, DiscoveryError> {
    let mut ids = Vec::new();

    for (line_no, line) in logical_lines(content) {
        let Some((key, value)) = split_entry(&line) else {
            return Err(DiscoveryError::Manifest {
                path: path.to_path_buf(),
                line: line_no,
                message: format!("expected 'key=value', found '{}'", line),
            });
        };
        if key != PROVIDER_KEY {
            continue;
        }
        ids.extend(
            value
                .split(',')
                .map(str::trim)
                .filter(|id| !id.is_empty())
                .map(str::to_string),
        );
    }

    Ok(ids)
}

/// Join continuation lines and drop blanks and comments.
/// Yields the 1-based line number where each logical line starts.
fn logical_lines(content: &str) -> Vec<(usize, String)> {
    let mut lines = Vec::new();
    let mut pending: Option<(usize, String)> = None;

    for (idx, raw) in content.lines().enumerate() {
        let continuing = pending.is_some();
        let trimmed = raw.trim_start();

        if !continuing && (trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with('!'))
        {
            continue;
        }

        let (body, continues) = match trimmed.strip_suffix('\\') {
            Some(body) if !is_escaped(body) => (body, true),
            _ => (trimmed, false),
        };

        let (start, mut buf) = pending.take().unwrap_or((idx + 1, String::new()));
        buf.push_str(body);

        if continues {
            pending = Some((start, buf));
        } else {
            lines.push((start, buf));
        }
    }

    if let Some(last) = pending {
        lines.push(last);
    }
    lines
}

/// Whether the backslash right after `body` is itself escaped.
fn is_escaped(body: &str) -> bool {
    body.chars().rev().take_while(|c| *c == '\\').count() % 2 == 1
}

fn split_entry(line: &str) -> Option<(&str, &str)> {
    let pos = line.find(['=', ':'])?;
    let key = line[..pos].trim();
    if key.is_empty() {
        return None;
    }
    Some((key, line[pos + 1..].trim()))
}
