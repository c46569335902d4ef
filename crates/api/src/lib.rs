pub mod context;
pub mod environment;
pub mod error;
pub mod models;

// Re-export commonly used types
pub use context::ApplicationContext;
pub use environment::Environment;
pub use error::{
    NoApplicableProvider, ProviderError, ProviderResult, ResolutionError, ResolutionResult,
};
pub use models::*;
