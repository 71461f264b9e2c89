use crate::types::{LogLevel, OutputFormat, ThemeName, ViewStyle};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "catalog")]
#[command(about = "Browse, search and edit a product catalog in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Directory holding config.toml and catalog.log [default: $CATALOG_PATH or the XDG data dir]
    #[arg(long, global = true)]
    pub data_dir: Option<String>,

    /// Seed file (JSON array of products) to load instead of the configured one
    #[arg(long, global = true)]
    pub seed: Option<PathBuf>,

    #[arg(long, default_value = "info", global = true)]
    pub log_level: LogLevel,

    /// Color scheme for the TUI [default: from config]
    #[arg(long, global = true)]
    pub theme: Option<ThemeName>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open the product screen directly, skipping the landing screen
    Browse {
        #[arg(long)]
        view: Option<ViewStyle>,

        /// Initial search text
        #[arg(long)]
        search: Option<String>,
    },

    /// Print one page of products and exit
    List {
        #[arg(long)]
        search: Option<String>,

        #[arg(long, default_value = "1")]
        page: usize,

        #[arg(long)]
        view: Option<ViewStyle>,

        #[arg(long, default_value = "plain")]
        format: OutputFormat,
    },

    /// Write a default config.toml into the data directory
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}
