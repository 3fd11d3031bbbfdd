// crates/retarget-cli/src/main.rs
//
// CLI entrypoint for the retargeting developer tools.
//
// Provides subcommands for inspecting chain taxonomies, deriving retargeting
// configs from a bone mapping, comparing uploaded rigs against the source
// rig, and generating mappings for known archetypes.

mod commands;
mod config;
mod input;
mod output;

use clap::{Parser, Subcommand};
use commands::automap::AutomapCmd;
use commands::compare::CompareCmd;
use commands::derive::DeriveCmd;
use commands::taxonomy::TaxonomyCmd;
use commands::Context;
use config::{load_failure_is_visible, CliConfig, DEFAULT_CONFIG_PATH};
use output::OutputFormat;

/// Retarget CLI: chain taxonomies and bone-mapping configs for Mesh2Motion rigs.
#[derive(Parser, Debug)]
#[command(
    name = "retarget",
    version = "0.1.0",
    about = "Derive skeletal retargeting configs from bone mappings"
)]
struct Cli {
    /// Path to the TOML configuration file.
    #[arg(long, global = true)]
    config: Option<String>,

    /// Log level override: trace, debug, info, warn, error.
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Print JSON instead of tables.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level subcommands.
#[derive(Debug, Subcommand)]
enum Commands {
    /// Print the chains of a registered rig taxonomy.
    Taxonomy(TaxonomyCmd),

    /// Derive custom source and target configs from a bone mapping file.
    Derive(DeriveCmd),

    /// Validate a target rig and check whether it matches the source rig.
    Compare(CompareCmd),

    /// Generate a bone mapping for a rig matching a known archetype.
    Automap(AutomapCmd),
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Load configuration before logging is up; report the outcome afterwards.
    let config_path = cli.config.as_deref().unwrap_or(DEFAULT_CONFIG_PATH);
    let loaded = CliConfig::load(config_path);
    let config = match &loaded {
        Ok(cfg) => cfg.clone(),
        Err(_) => CliConfig::default(),
    };

    // RUST_LOG wins, then --log-level, then the config file.
    let level = cli.log_level.as_deref().unwrap_or(&config.log_level);
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match loaded {
        Ok(_) => tracing::info!("Loaded configuration from {}", config_path),
        Err(e) if load_failure_is_visible(config_path, cli.config.is_some()) => {
            tracing::warn!(
                "Could not load config from {}: {}. Using defaults.",
                config_path,
                e
            );
        }
        Err(e) => tracing::debug!("No config at {} ({}); using defaults", config_path, e),
    }

    let ctx = Context {
        registry: config.build_registry()?,
        output: if cli.json { OutputFormat::Json } else { config.output },
    };

    match &cli.command {
        Commands::Taxonomy(cmd) => commands::taxonomy::run(cmd, &ctx)?,
        Commands::Derive(cmd) => commands::derive::run(cmd, &ctx)?,
        Commands::Compare(cmd) => commands::compare::run(cmd, &ctx)?,
        Commands::Automap(cmd) => commands::automap::run(cmd, &ctx)?,
    }

    Ok(())
}
