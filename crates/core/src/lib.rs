pub mod config;
pub mod context;
pub mod discovery;
pub mod error;
pub mod logging;
pub mod resolver;

pub use config::{FallbackPolicy, ResolverConfig};
pub use context::{GenericContext, StandardEnvironment};
pub use discovery::{ManifestDiscovery, ProviderCatalog, StaticDiscovery};
pub use error::{AppCtxError, Result};
pub use resolver::ProviderResolver;
