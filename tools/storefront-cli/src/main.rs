//! Storefront CLI - Command line tool for a headless storefront catalog.
//!
//! Commands:
//! - `storefront validate` - Check catalog data for invalid variants
//! - `storefront preview` - Drive a product card from the terminal
//! - `storefront index` - Render the home page product grid
//! - `storefront subscribe` - Run the newsletter flow against a dry-run service
//! - `storefront config` - Manage configuration

mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{ConfigArgs, IndexArgs, PreviewArgs, SubscribeArgs, ValidateArgs};

/// Storefront CLI - Preview and validate headless storefront data
#[derive(Parser)]
#[command(name = "storefront")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate every product in a catalog
    Validate(ValidateArgs),

    /// Preview a product card with an option selection
    Preview(PreviewArgs),

    /// Render the storefront home page
    Index(IndexArgs),

    /// Subscribe an email to the newsletter (dry run)
    Subscribe(SubscribeArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load config
    let config_path = cli.config.as_deref();
    let ctx = context::Context::load(config_path, output)?;

    init_tracing(cli.verbose, &ctx.config.logging.level)?;

    // Execute command
    let result = match cli.command {
        Commands::Validate(args) => commands::validate::run(args, &ctx).await,
        Commands::Preview(args) => commands::preview::run(args, &ctx).await,
        Commands::Index(args) => commands::index::run(args, &ctx).await,
        Commands::Subscribe(args) => commands::subscribe::run(args, &ctx).await,
        Commands::Config(args) => commands::config::run(args, &ctx).await,
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}

/// Install the log subscriber. `RUST_LOG` wins over the configured level;
/// `--verbose` forces debug.
fn init_tracing(verbose: bool, level: &str) -> Result<()> {
    let env_filter = if verbose {
        EnvFilter::try_new("debug")?
    } else {
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(level))?
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    Ok(())
}
