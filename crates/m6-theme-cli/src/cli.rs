//! Command-line arguments.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use m6_theme::{StorageKey, ThemePreference};

#[derive(Debug, Parser)]
#[command(name = "m6-theme", version, about = "Show or toggle the persisted dark/light theme")]
pub struct Cli {
    /// YAML config file (storage_key, storage_path)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Storage key the preference lives under
    #[arg(long, global = true, value_name = "KEY")]
    pub key: Option<StorageKey>,

    /// JSON file used as persistent storage
    #[arg(long, global = true, value_name = "PATH")]
    pub store: Option<PathBuf>,

    /// Pretend a bootstrap script already marked the root as dark
    #[arg(long, global = true)]
    pub bootstrap_dark: bool,

    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    pub output: OutputFormat,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Print the current theme (default)
    ///
    /// Mounting writes the resolved value to storage, so the first status
    /// records the system preference.
    Status,
    /// Flip between light and dark
    Toggle,
    /// Switch to the given theme
    Set {
        #[arg(value_parser = parse_preference)]
        theme: ThemePreference,
    },
    /// Forget the stored preference and fall back to the system setting
    Reset,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

fn parse_preference(raw: &str) -> Result<ThemePreference, String> {
    raw.parse()
}
