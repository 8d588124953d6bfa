//! Turbo CLI - Command line tool for TurboCommerce product cards.
//!
//! Commands:
//! - `turbo render` - Render a catalog to an HTML page
//! - `turbo inspect` - Show the derived card fields of a catalog
//! - `turbo theme` - Show, toggle, or reset the persisted theme
//! - `turbo config` - Manage configuration

mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{ConfigArgs, InspectArgs, RenderArgs, ThemeArgs};

/// Turbo CLI - Render and inspect TurboCommerce product cards
#[derive(Parser)]
#[command(name = "turbo")]
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
    /// Render a product catalog to an HTML page
    Render(RenderArgs),

    /// Show the display fields derived for each product
    Inspect(InspectArgs),

    /// Manage the persisted theme preference
    Theme(ThemeArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let output = output::Output::new(cli.verbose, cli.json);

    let config_path = cli.config.as_deref();
    let ctx = context::Context::load(config_path, output)?;

    let result = match cli.command {
        Commands::Render(args) => commands::render::run(args, &ctx),
        Commands::Inspect(args) => commands::inspect::run(args, &ctx),
        Commands::Theme(args) => commands::theme::run(args, &ctx),
        Commands::Config(args) => commands::config::run(args, &ctx),
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
