use crate::CliResult;
use appctx_api::WebApplicationType;
use appctx_core::ResolverConfig;
use tracing::info;

pub fn run(web_type: WebApplicationType, config: &ResolverConfig) -> CliResult {
    let resolver = appctx_runtime::build_default_resolver(config);
    info!("Resolving application context for '{}'", web_type);

    match resolver.get_environment_kind(web_type)? {
        Some(kind) => println!("Environment kind: {}", kind),
        None => println!("Environment kind: <none>"),
    }

    match resolver.create_environment(web_type)? {
        Some(env) => {
            println!("Environment:      {}", env.kind());
            let profiles = env.active_profiles();
            if !profiles.is_empty() {
                println!("Active profiles:  {}", profiles.join(", "));
            }
        }
        None => println!("Environment:      <none>"),
    }

    let context = resolver.create_context(web_type)?;
    println!("Context:          {}", context.display_name());
    Ok(())
}
