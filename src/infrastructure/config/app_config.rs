//! Application configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::args::CliArgs;
use crate::domain::entities::{EmbedProvider, EnabledProviders};

/// Log level configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Trace level.
    Trace,
    /// Debug level.
    Debug,
    /// Info level.
    #[default]
    Info,
    /// Warning level.
    Warn,
    /// Error level.
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Trace => write!(f, "trace"),
            Self::Debug => write!(f, "debug"),
            Self::Info => write!(f, "info"),
            Self::Warn => write!(f, "warn"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Application configuration, from `config.toml` overlaid with CLI flags.
#[derive(Debug, Serialize, Deserialize)]
pub struct AppConfig {
    /// Configuration file path.
    #[serde(skip)]
    pub config: Option<PathBuf>,

    /// Log file path. Logs go to stderr when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[serde(default)]
    pub log_level: LogLevel,

    /// Discord token. Only ever taken from the CLI or environment.
    #[serde(skip)]
    pub token: Option<String>,

    /// Base URL of the Discord REST API.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Unfurl request timeout in seconds.
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,

    /// Mirror provider switches.
    #[serde(default)]
    pub providers: EnabledProviders,

    /// Notification configuration.
    #[serde(default)]
    pub notifications: NotificationsConfig,
}

/// Notification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationsConfig {
    /// Show toasts at all.
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Toast duration in seconds.
    #[serde(default = "default_notification_duration")]
    pub duration_secs: u64,
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            duration_secs: default_notification_duration(),
        }
    }
}

fn default_api_base_url() -> String {
    "https://discord.com/api/v9".to_string()
}

const fn default_request_timeout() -> u64 {
    30
}

const fn default_true() -> bool {
    true
}

const fn default_notification_duration() -> u64 {
    5
}

impl AppConfig {
    /// Merges CLI arguments into the configuration.
    pub fn merge_with_args(&mut self, args: &CliArgs) {
        if let Some(config_path) = &args.config {
            self.config = Some(config_path.clone());
        }
        if let Some(log_path) = &args.log_path {
            self.log_path = Some(log_path.clone());
        }
        if let Some(log_level) = args.log_level {
            self.log_level = log_level;
        }
        if let Some(token) = &args.token {
            self.token = Some(token.clone());
        }
        if let Some(api_base_url) = &args.api_base_url {
            self.api_base_url.clone_from(api_base_url);
        }
        if let Some(timeout) = args.request_timeout {
            self.request_timeout_secs = timeout;
        }

        let overrides = [
            (EmbedProvider::DdInstagram, args.ddinstagram),
            (EmbedProvider::VxTwitter, args.vxtwitter),
            (EmbedProvider::VxTikTok, args.vxtiktok),
            (EmbedProvider::RxDdit, args.rxddit),
        ];
        for (provider, value) in overrides {
            if let Some(enabled) = value {
                self.providers = self.providers.with(provider, enabled);
            }
        }

        if let Some(enabled) = args.notifications {
            self.notifications.enabled = enabled;
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            config: None,
            log_path: None,
            log_level: LogLevel::Info,
            token: None,
            api_base_url: default_api_base_url(),
            request_timeout_secs: default_request_timeout(),
            providers: EnabledProviders::default(),
            notifications: NotificationsConfig::default(),
        }
    }
}
