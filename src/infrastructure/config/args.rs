use super::app_config::LogLevel;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line arguments. Global flags override `config.toml`.
#[derive(Debug, Parser)]
#[command(
    name = "oxiembed",
    version,
    about = "Show link previews for URLs Discord did not unfurl",
    long_about = None
)]
pub struct CliArgs {
    /// Configuration file path.
    #[arg(short, long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[arg(long, value_name = "PATH", global = true)]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[arg(long, value_enum, global = true)]
    pub log_level: Option<LogLevel>,

    /// Discord token used for the unfurl request.
    #[arg(long, env = "OXIEMBED_TOKEN", hide_env_values = true, global = true)]
    pub token: Option<String>,

    /// Discord REST API base URL.
    #[arg(long, value_name = "URL", global = true)]
    pub api_base_url: Option<String>,

    /// Unfurl request timeout in seconds.
    #[arg(long, value_name = "SECS", global = true)]
    pub request_timeout: Option<u64>,

    /// Show instagram links as ddinstagram embeds.
    #[arg(long, global = true)]
    pub ddinstagram: Option<bool>,

    /// Show twitter links as vxtwitter embeds.
    #[arg(long, global = true)]
    pub vxtwitter: Option<bool>,

    /// Show tiktok links as vxtiktok embeds.
    #[arg(long, global = true)]
    pub vxtiktok: Option<bool>,

    /// Show reddit links as rxddit embeds.
    #[arg(long, global = true)]
    pub rxddit: Option<bool>,

    /// Show failure toasts.
    #[arg(long, global = true)]
    pub notifications: Option<bool>,

    /// Action to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the canonical and provider form of a link.
    Normalize {
        /// Link to normalize.
        url: String,
    },

    /// Fetch an embed for a link in a message and print the merged embed list.
    Unfurl {
        /// Message JSON file, or `-` for stdin.
        #[arg(long, value_name = "FILE")]
        message: PathBuf,

        /// Link that was right-clicked.
        #[arg(long)]
        href: String,

        /// The link belongs to an attachment.
        #[arg(long)]
        attachment: bool,
    },
}
