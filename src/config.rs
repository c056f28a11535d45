//! Command line configuration

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use storefront::catalog::DEFAULT_PAGE_SIZE;

use crate::cli::Commands;

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum LogFormat {
    /// Human readable single-line output
    #[default]
    Compact,

    /// One JSON object per event
    Json,
}

/// Storefront CLI configuration
#[derive(Debug, Parser)]
#[command(name = "storefront", about = "Storefront catalog and cart CLI", long_about = None)]
pub(crate) struct Config {
    /// Directory holding fixture sets
    #[arg(long, env = "STOREFRONT_FIXTURES", default_value = "./fixtures", global = true)]
    pub(crate) fixtures: PathBuf,

    /// Fixture set to load products from
    #[arg(short, long, env = "STOREFRONT_FIXTURE_SET", default_value = "sports", global = true)]
    pub(crate) fixture: String,

    /// Products per catalog page
    #[arg(long, env = "STOREFRONT_PAGE_SIZE", default_value_t = DEFAULT_PAGE_SIZE, global = true)]
    pub(crate) page_size: u32,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "RUST_LOG", default_value = "info", global = true)]
    pub(crate) log_level: String,

    /// Log output format
    #[arg(long, env = "STOREFRONT_LOG_FORMAT", value_enum, default_value_t, global = true)]
    pub(crate) log_format: LogFormat,

    #[command(subcommand)]
    pub(crate) command: Commands,
}

impl Config {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub(crate) fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }
}
