//! Waypost - locale-aware URL resolution and cache revalidation for
//! CMS-backed multi-locale sites.

mod cli;
mod config;
mod core;
mod locale;
mod logger;
mod revalidate;

use std::sync::Arc;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::SiteConfig;

fn main() -> Result<()> {
    // Setup global Ctrl+C handler (before any blocking operations)
    core::setup_shutdown_handler()?;

    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    let config = Arc::new(SiteConfig::load(&cli)?);

    match &cli.command {
        Commands::Serve { .. } => cli::serve::run(config),
        Commands::Resolve { locale, path, absolute } => {
            cli::run_resolve(&config, locale, path, *absolute)
        }
        Commands::Alternates { pathname, locale, json } => {
            cli::run_alternates(&config, pathname, locale.as_deref(), *json)
        }
        Commands::Paths { content_type, slug, purge } => {
            cli::run_paths(&config, content_type, slug, *purge)
        }
    }
}
