//! CLI command implementations.

pub mod config;
pub mod inspect;
pub mod render;
pub mod theme;

use std::fs;

use anyhow::{Context as _, Result};
use clap::{Args, Subcommand};

use turbo_commerce::catalog::Catalog;
use turbo_commerce::Currency;

use crate::context::Context;

/// Arguments for the render command.
#[derive(Args)]
pub struct RenderArgs {
    /// Product catalog (JSON array of products).
    pub catalog: String,

    /// Write the page here instead of stdout.
    #[arg(short, long)]
    pub output: Option<String>,

    /// Page title.
    #[arg(short, long, default_value = "Products")]
    pub title: String,

    /// Render loading placeholders instead of the cards.
    #[arg(long)]
    pub loading: bool,

    /// Mark every card image as already loaded.
    #[arg(long)]
    pub loaded: bool,

    /// Override the currency from the config.
    #[arg(long)]
    pub currency: Option<String>,
}

/// Arguments for the inspect command.
#[derive(Args)]
pub struct InspectArgs {
    /// Product catalog (JSON array of products).
    pub catalog: String,

    /// Only show this product id.
    #[arg(short, long)]
    pub id: Option<String>,

    /// Override the currency from the config.
    #[arg(long)]
    pub currency: Option<String>,
}

/// Arguments for the theme command.
#[derive(Args)]
pub struct ThemeArgs {
    #[command(subcommand)]
    pub command: ThemeCommand,
}

/// Theme subcommands.
#[derive(Subcommand)]
pub enum ThemeCommand {
    /// Show the current theme and where it came from
    Show,

    /// Flip between light and dark
    Toggle,

    /// Forget the persisted preference
    Reset {
        /// Skip confirmation prompt.
        #[arg(short, long)]
        yes: bool,
    },
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands.
#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show,

    /// Initialize a new config file
    Init {
        /// Overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },

    /// Validate configuration
    Validate,
}

/// Read and validate a catalog file.
pub(crate) fn load_catalog(path: &str, ctx: &Context) -> Result<Catalog> {
    let path = ctx.resolve_path(path);
    let content = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read catalog: {}", path.display()))?;
    let catalog = Catalog::from_json(&content)
        .with_context(|| format!("Invalid catalog: {}", path.display()))?;
    ctx.output
        .debug(&format!("Loaded {} product(s) from {}", catalog.len(), path.display()));
    Ok(catalog)
}

/// Currency from a command-line override, else from the config.
pub(crate) fn resolve_currency(flag: Option<&str>, ctx: &Context) -> Result<Currency> {
    match flag {
        Some(code) => Ok(Currency::parse(code)?),
        None => Ok(ctx.config.storefront.currency()),
    }
}
