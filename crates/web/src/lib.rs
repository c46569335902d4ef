//! Built-in providers for web applications.
//!
//! Each provider only applies to its own [`WebApplicationType`] and declines
//! everything else, so both can be registered side by side.
//!
//! [`WebApplicationType`]: appctx_api::WebApplicationType

pub mod context;
pub mod reactive;
pub mod servlet;

pub use context::WebServerContext;
pub use reactive::ReactiveProvider;
pub use servlet::ServletProvider;

/// Property every web environment carries with its application type.
pub const WEB_TYPE_PROPERTY: &str = "appctx.web.type";
