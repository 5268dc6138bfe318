//! Site configuration management for `waypost.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── site       # [site]
//! │   ├── locales    # [locales]
//! │   ├── revalidate # [revalidate]
//! │   ├── purge      # [purge]
//! │   └── serve      # [serve]
//! ├── types/         # Utility types
//! │   └── error      # ConfigError, ConfigDiagnostics
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! Configuration is loaded once in `main` and passed down by reference;
//! there is no global config handle and no hot reload. The locale set and
//! availability policy are immutable for the life of the process.

pub mod section;
pub mod types;
mod util;

use util::find_config_file;

// Re-export from section/
pub use section::{
    DEFAULT_SHARED_SEGMENTS, LocalesConfig, PurgeConfig, RevalidateConfig, ServeConfig,
    SiteSectionConfig,
};

// Re-export from types/
pub use types::{ConfigDiagnostic, ConfigDiagnostics, ConfigError};

use crate::{
    cli::{Cli, Commands},
    log,
};
use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path, path::PathBuf};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing waypost.toml
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SiteConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Site identity (title, base URL)
    #[serde(default)]
    pub site: SiteSectionConfig,

    /// Locale set and availability policy
    #[serde(default)]
    pub locales: LocalesConfig,

    /// Webhook route and invalidation fan-out
    #[serde(default)]
    pub revalidate: RevalidateConfig,

    /// Outbound cache-invalidation API
    #[serde(default)]
    pub purge: PurgeConfig,

    /// Webhook server settings
    #[serde(default)]
    pub serve: ServeConfig,
}

impl SiteConfig {
    /// Load configuration from CLI arguments.
    ///
    /// Searches upward from cwd to find the config file, then applies
    /// command-line overrides on top of the parsed sections.
    pub fn load(cli: &Cli) -> Result<Self> {
        let Some(config_path) = find_config_file(&cli.config) else {
            log!(
                "error";
                "Config file '{}' not found. Create a waypost.toml at the project root.",
                cli.config.display()
            );
            std::process::exit(1);
        };

        let mut config = Self::from_path(&config_path)?;
        config.config_path = config_path;
        config.apply_command_options(cli);
        config.validate()?;

        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
            if !Self::prompt_continue()? {
                bail!("Aborted due to unknown config fields");
            }
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })
        .map_err(ConfigError::Toml)?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        eprintln!();
        log!("warning"; "unknown fields in {}:", display_path);
        log!("warning"; "ignoring:");
        for field in fields {
            eprintln!("- {}", field);
        }
        eprintln!();
    }

    /// Prompt user to continue. Returns true only if user explicitly confirms.
    fn prompt_continue() -> Result<bool> {
        use std::io::{self, Write};

        eprint!("Continue? [y/N] ");
        io::stderr().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;

        let input = input.trim().to_lowercase();
        // Default no (empty input), explicit "y" or "yes" to continue
        Ok(input == "y" || input == "yes")
    }

    /// Apply command-specific configuration options.
    fn apply_command_options(&mut self, cli: &Cli) {
        if let Commands::Serve { interface, port, verbose } = &cli.command {
            crate::logger::set_verbose(*verbose);
            Self::update_option(&mut self.serve.interface, interface.as_ref());
            Self::update_option(&mut self.serve.port, port.as_ref());
        }
    }

    /// Update config option if CLI value is provided.
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    /// Validate configuration.
    ///
    /// Collects all validation errors and returns them at once.
    pub fn validate(&self) -> Result<()> {
        let mut diag = ConfigDiagnostics::new();

        self.site.validate(&mut diag);
        self.locales.validate(&mut diag);
        self.revalidate.validate(&mut diag);
        self.purge.validate(&mut diag);

        diag.into_result().map_err(|e| ConfigError::Diagnostics(e).into())
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config from a TOML snippet.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(content: &str) -> SiteConfig {
    let (parsed, ignored) = SiteConfig::parse_with_ignored(content).unwrap();
    assert!(ignored.is_empty(), "test config has unknown fields: {:?}", ignored);
    parsed
}

/// Config with the three-locale setup most tests use:
/// default `en` plus `en-GB` and `en-AU`, base URL set.
#[cfg(test)]
pub fn test_config_three_locales() -> SiteConfig {
    test_parse_config(
        r#"
[site]
title = "Resources"
url = "https://example.com"

[locales]
default = "en"
supported = ["en", "en-GB", "en-AU"]

[locales.hreflang]
en = "en-US"
en-GB = "en-GB"
en-AU = "en-AU"
"#,
    )
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_invalid_toml() {
        // Invalid TOML syntax - unclosed bracket
        let result: Result<SiteConfig, _> = toml::from_str("[site\ntitle = \"Resources\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_site_config_default() {
        let config = SiteConfig::default();

        assert_eq!(config.config_path, PathBuf::new());
        assert_eq!(config.locales.default, "en");
        assert_eq!(config.serve.port, 5299);
        assert_eq!(config.revalidate.pagination_depth, 3);
    }

    #[test]
    fn test_unknown_fields_detected() {
        let content = "[site]\ntitle = \"Test\"\n[unknown_section]\nfield = \"value\"";
        let (config, ignored) = SiteConfig::parse_with_ignored(content).unwrap();

        // Config should parse successfully
        assert_eq!(config.site.title, "Test");

        // Unknown fields should be collected
        assert!(!ignored.is_empty());
        assert!(ignored.iter().any(|f| f.contains("unknown_section")));
    }

    #[test]
    fn test_no_unknown_fields() {
        let content = "[site]\ntitle = \"Test\"";
        let (_, ignored) = SiteConfig::parse_with_ignored(content).unwrap();
        assert!(ignored.is_empty());
    }

    #[test]
    fn test_validate_collects_all_errors() {
        let config = test_parse_config(
            "[locales]\ndefault = \"de\"\nsupported = [\"en\"]\n\
             [revalidate]\npagination_depth = 0",
        );
        let err = config.validate().unwrap_err();
        let diag = err.downcast_ref::<ConfigError>().unwrap();
        match diag {
            ConfigError::Diagnostics(d) => assert!(d.errors().len() >= 2),
            other => panic!("expected diagnostics, got {other:?}"),
        }
    }

    #[test]
    fn test_three_locale_fixture() {
        let config = test_config_three_locales();
        assert!(config.validate().is_ok());
        assert_eq!(config.site.base_url(), "https://example.com");
        assert!(config.locales.is_supported("en-AU"));
    }
}
