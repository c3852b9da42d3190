//! Configuration management for the G-code line parser CLI.
//!
//! Handles:
//! - Command-line argument parsing
//! - Flavor directory configuration

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments for `gcode-parse`
#[derive(Debug, Parser)]
#[command(name = "gcode-parse")]
#[command(about = "Parse G-code lines into command names and typed parameters")]
#[command(version)]
pub struct Args {
    /// G-code lines to parse
    pub lines: Vec<String>,

    /// Read lines from a file instead ("-" for stdin)
    #[arg(
        long,
        short = 'f',
        conflicts_with = "lines",
        help = "File to parse line by line, or '-' for stdin"
    )]
    pub file: Option<PathBuf>,

    /// Explicitly specify the G-code flavor to use
    #[arg(long, help = "G-code flavor to use (e.g., 'octolapse')")]
    pub flavor: Option<String>,

    /// Custom flavor directory to search for flavor files
    #[arg(long, help = "Directory containing flavor TOML files")]
    pub flavor_dir: Option<PathBuf>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Log level for the parser
    #[arg(
        long,
        default_value = "warn",
        help = "Log level (trace, debug, info, warn, error)"
    )]
    pub log_level: String,
}

/// Where the lines to parse come from
#[derive(Debug, Clone, PartialEq)]
pub enum InputSource {
    Lines(Vec<String>),
    File(PathBuf),
    Stdin,
}

/// Combined configuration from all sources
#[derive(Debug, Clone)]
pub struct Config {
    /// Lines to parse; `None` when the caller gave nothing
    pub input: Option<InputSource>,
    /// Flavor name explicitly set via command line
    pub cli_flavor: Option<String>,
    /// Flavor directories to load, lowest priority first
    pub flavor_dirs: Vec<PathBuf>,
    /// Pretty-print output
    pub pretty: bool,
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
        let input = match args.file {
            Some(path) if path.as_os_str() == "-" => Some(InputSource::Stdin),
            Some(path) => Some(InputSource::File(path)),
            None if !args.lines.is_empty() => Some(InputSource::Lines(args.lines)),
            None => None,
        };

        let mut flavor_dirs = Vec::new();

        // Default user config directory
        if let Some(config_dir) = dirs::config_dir() {
            flavor_dirs.push(config_dir.join("gcode-parse").join("flavors"));
        }

        // User-specified directory wins over the default one
        if let Some(custom_dir) = args.flavor_dir {
            flavor_dirs.push(custom_dir);
        }

        Ok(Config {
            input,
            cli_flavor: args.flavor,
            flavor_dirs,
            pretty: args.pretty,
            log_level: args.log_level,
        })
    }

    /// Get the effective flavor name from CLI arguments
    pub fn get_effective_flavor(&self) -> Option<String> {
        self.cli_flavor.clone()
    }
}
