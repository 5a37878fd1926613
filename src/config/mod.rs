pub mod toml_config;

#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "pantry")]
#[command(about = "Track pantry items, their freshness, and recipes for what is about to expire")]
pub struct CliConfig {
    #[arg(short, long, help = "Path to a TOML configuration file")]
    pub config: Option<String>,

    #[arg(long, help = "Reference date (YYYY-MM-DD) instead of today")]
    pub today: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Subcommand)]
pub enum Command {
    /// Show total, fresh, expiring and expired counts
    Stats,
    /// List items, optionally filtered
    List {
        #[arg(short, long, default_value = "")]
        search: String,
        #[arg(long, default_value = crate::core::pantry::ALL_CATEGORIES)]
        category: String,
    },
    /// List items that are expiring or expired
    Attention,
    /// Look up a barcode and show the pre-filled item
    Lookup { barcode: String },
    /// Suggest recipes for expiring items
    Recipes,
}
