mod deduce;
mod providers;
mod resolve;

use appctx_core::ResolverConfig;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

pub type CliResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

#[derive(Parser)]
#[command(
    name = "appctx",
    version,
    about = "Resolve application contexts from pluggable providers",
    long_about = "appctx polls an ordered list of context providers for a web application type. \
                  The first provider that applies wins; when none does, a generic context is \
                  created instead."
)]
pub struct Cli {
    /// Also write logs to stderr
    #[arg(long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Resolve the environment and context for a web application type
    Resolve {
        /// One of: none, servlet, reactive
        #[arg(value_name = "TYPE")]
        web_type: appctx_api::WebApplicationType,

        #[command(flatten)]
        source: SourceArgs,
    },
    /// List discovered providers in resolution order
    Providers {
        #[command(flatten)]
        source: SourceArgs,
    },
    /// Deduce the web application type from available capability markers
    Deduce {
        /// Capability marker, e.g. servlet-api (repeatable)
        #[arg(long = "marker", value_name = "NAME")]
        markers: Vec<String>,
    },
}

/// Where providers come from.
#[derive(Args)]
pub struct SourceArgs {
    /// JSON configuration file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Provider manifest, replaces the configured manifests (repeatable)
    #[arg(long = "manifest", value_name = "FILE")]
    pub manifests: Vec<PathBuf>,
}

impl SourceArgs {
    pub fn load_config(&self) -> appctx_core::Result<ResolverConfig> {
        let mut config = ResolverConfig::resolve(self.config.as_deref())?;
        if !self.manifests.is_empty() {
            config.manifests = self.manifests.clone();
        }
        Ok(config)
    }
}

pub fn run() -> CliResult {
    let cli = Cli::parse();
    let _guard = appctx_runtime::init_logging("cli", cli.verbose);

    match cli.command {
        Commands::Resolve { web_type, source } => resolve::run(web_type, &source.load_config()?),
        Commands::Providers { source } => providers::run(&source.load_config()?),
        Commands::Deduce { markers } => deduce::run(&markers),
    }
}
