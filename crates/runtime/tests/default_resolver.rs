use appctx_api::{EnvironmentKind, NoApplicableProvider, WebApplicationType};
use appctx_core::config::{FallbackPolicy, ResolverConfig};
use appctx_core::GenericContext;
use appctx_runtime::{build_default_resolver, default_catalog};
use appctx_web::WebServerContext;

#[test]
fn test_catalog_order() {
    let catalog = default_catalog();
    assert_eq!(catalog.ids().collect::<Vec<_>>(), vec!["servlet", "reactive"]);
}

#[test]
fn test_default_resolver_per_type() {
    let resolver = build_default_resolver(&ResolverConfig::default());

    let kind = resolver
        .get_environment_kind(WebApplicationType::Servlet)
        .unwrap();
    assert_eq!(kind, Some(EnvironmentKind::SERVLET));

    let env = resolver
        .create_environment(WebApplicationType::Reactive)
        .unwrap()
        .unwrap();
    assert_eq!(env.kind(), EnvironmentKind::REACTIVE);

    let ctx = resolver
        .create_context(WebApplicationType::Reactive)
        .unwrap();
    let web = ctx.as_any().downcast_ref::<WebServerContext>().unwrap();
    assert_eq!(web.web_type(), WebApplicationType::Reactive);

    // nothing handles non-web applications, so the generic context is used
    assert!(resolver
        .get_environment_kind(WebApplicationType::None)
        .unwrap()
        .is_none());
    let ctx = resolver.create_context(WebApplicationType::None).unwrap();
    assert!(ctx.as_any().downcast_ref::<GenericContext>().is_some());
}

#[test]
fn test_disabled_provider_falls_back() {
    let config = ResolverConfig {
        disabled_providers: vec!["servlet".to_string()],
        ..Default::default()
    };
    let resolver = build_default_resolver(&config);

    let ctx = resolver.create_context(WebApplicationType::Servlet).unwrap();
    assert!(ctx.as_any().downcast_ref::<GenericContext>().is_some());
    assert!(resolver
        .create_context(WebApplicationType::Reactive)
        .unwrap()
        .as_any()
        .is::<WebServerContext>());
}

#[test]
fn test_no_fallback_policy() {
    let config = ResolverConfig {
        fallback: FallbackPolicy::None,
        ..Default::default()
    };
    let resolver = build_default_resolver(&config);

    let err = resolver.create_context(WebApplicationType::None).unwrap_err();
    assert!(err.cause().is::<NoApplicableProvider>());
    assert!(resolver.create_context(WebApplicationType::Servlet).is_ok());
}

#[test]
fn test_manifest_config() {
    let dir = tempfile::tempdir().unwrap();
    let manifest = dir.path().join("providers.manifest");
    std::fs::write(&manifest, "appctx.ContextProvider=reactive\n").unwrap();

    let config = ResolverConfig {
        manifests: vec![manifest],
        ..Default::default()
    };
    let resolver = build_default_resolver(&config);

    // servlet is not listed, so it is never consulted
    assert!(resolver
        .get_environment_kind(WebApplicationType::Servlet)
        .unwrap()
        .is_none());
    assert_eq!(
        resolver
            .get_environment_kind(WebApplicationType::Reactive)
            .unwrap(),
        Some(EnvironmentKind::REACTIVE)
    );
}
