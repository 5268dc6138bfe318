//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Waypost locale-aware URL and revalidation engine CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: waypost.toml)
    #[arg(short = 'C', long, default_value = "waypost.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Start the content-change webhook server
    #[command(visible_alias = "s")]
    Serve {
        /// Network interface to bind (e.g., 127.0.0.1, 0.0.0.0)
        #[arg(short, long)]
        interface: Option<std::net::IpAddr>,

        /// Port number to listen on
        #[arg(short, long)]
        port: Option<u16>,

        /// Log every purged path
        #[arg(short, long)]
        verbose: bool,
    },

    /// Resolve a locale and content path to a site URL
    #[command(visible_alias = "r")]
    Resolve {
        /// Locale identifier (unknown locales resolve like the default)
        locale: String,

        /// Logical content path, e.g. article/my-post
        path: String,

        /// Print the absolute URL under the configured base domain
        #[arg(short, long)]
        absolute: bool,
    },

    /// Print the alternate-locale link set for a pathname
    #[command(visible_alias = "a")]
    Alternates {
        /// Request pathname, e.g. /en-GB/article/my-post
        pathname: String,

        /// Explicit locale (overrides the pathname prefix when configured)
        #[arg(short, long)]
        locale: Option<String>,

        /// Print as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Print (or purge) the invalidation path set for a content change
    #[command(visible_alias = "p")]
    Paths {
        /// Content type, e.g. article
        content_type: String,

        /// Content slug, e.g. my-post
        slug: String,

        /// Drive the configured purger instead of only printing
        #[arg(long)]
        purge: bool,
    },
}
