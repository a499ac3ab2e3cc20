//! Configuration management for the CSS lint language server.
//!
//! Handles:
//! - Command-line argument parsing
//! - Vocabulary directory configuration

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments for the CSS lint language server
#[derive(Debug, Parser)]
#[command(name = "css-lint-language-server")]
#[command(about = "Language server reporting CSS lint findings")]
#[command(version)]
pub struct Args {
    /// Custom vocabulary directory to search for extension TOML files
    #[arg(long, help = "Directory containing vocabulary TOML files")]
    pub vocab_dir: Option<PathBuf>,

    /// Log level for the language server
    #[arg(
        long,
        default_value = "info",
        help = "Log level (trace, debug, info, warn, error)"
    )]
    pub log_level: String,
}

/// Combined configuration from all sources
#[derive(Debug, Clone)]
pub struct Config {
    /// Vocabulary directories to search for extension files
    pub vocab_dirs: Vec<PathBuf>,
    /// Log level
    pub log_level: String,
}

impl Config {
    /// Create configuration from command-line arguments
    pub fn from_args_and_env() -> Result<Self> {
        Self::from_args(Args::parse())
    }

    /// Create configuration from explicit arguments (useful for testing)
    pub fn from_args(args: Args) -> Result<Self> {
        // Determine vocabulary directories
        let mut vocab_dirs = Vec::new();

        // Add user-specified directory if provided
        if let Some(custom_dir) = args.vocab_dir {
            vocab_dirs.push(custom_dir);
        }

        // Add default user config directory
        if let Some(config_dir) = dirs::config_dir() {
            vocab_dirs.push(config_dir.join("css-lint-ls").join("vocab"));
        }

        Ok(Config {
            vocab_dirs,
            log_level: args.log_level,
        })
    }
}
