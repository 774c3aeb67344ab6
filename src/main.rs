use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use tokio::io::AsyncReadExt;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use oxiembed::application::services::{NotificationManager, ProviderMapper, UrlNormalizer};
use oxiembed::application::{MenuTrigger, UnfurlEmbedUseCase};
use oxiembed::domain::entities::{ApiToken, Message};
use oxiembed::infrastructure::{
    AppConfig, CliArgs, Command, DiscordUnfurlClient, InMemoryMessageStore, MemoryEmbedCache,
    SettingsStore, StorageManager, ToastService,
};

fn init_logging(config: &AppConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.to_string()));

    if let Some(log_path) = &config.log_path {
        if let Some(parent) = log_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_path)?;

        let file_layer = fmt::layer()
            .with_writer(file)
            .with_ansi(false)
            .with_target(true)
            .with_thread_ids(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .init();

        info!(path = %log_path.display(), "Logging initialized");
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_writer(std::io::stderr))
            .init();
    }

    Ok(())
}

fn load_config(args: &CliArgs) -> Result<AppConfig> {
    let storage = StorageManager::new()?;
    let mut config = storage.load_config(args.config.as_deref())?;
    config.merge_with_args(args);
    Ok(config)
}

async fn read_message(path: &Path) -> Result<Message> {
    let raw = if path == Path::new("-") {
        let mut buf = String::new();
        tokio::io::stdin().read_to_string(&mut buf).await?;
        buf
    } else {
        tokio::fs::read_to_string(path)
            .await
            .wrap_err_with(|| format!("Failed to read {}", path.display()))?
    };

    serde_json::from_str(&raw).wrap_err("Message is not valid JSON")
}

fn normalize(config: &AppConfig, url: &str) -> Result<()> {
    let normalized = UrlNormalizer::normalize(url)?;
    let provider = ProviderMapper::map_to_provider(&normalized, config.providers)?;

    println!("normalized: {normalized}");
    println!("provider:   {provider}");

    Ok(())
}

async fn unfurl(config: &AppConfig, message: &Path, href: String, attachment: bool) -> Result<()> {
    let message = read_message(message).await?;

    let token = config.token.as_deref().and_then(ApiToken::new);
    debug!(token = ?token, base_url = %config.api_base_url, "Creating unfurl client");

    let client = DiscordUnfurlClient::with_base_url(
        config.api_base_url.as_str(),
        token,
        Duration::from_secs(config.request_timeout_secs),
    )?;
    let cache = Arc::new(MemoryEmbedCache::new());
    let store = Arc::new(InMemoryMessageStore::new());
    let toasts = ToastService::new(
        config.notifications.enabled,
        NotificationManager::new(Duration::from_secs(config.notifications.duration_secs)),
    );

    let use_case = UnfurlEmbedUseCase::new(
        Arc::new(client),
        cache.clone(),
        store,
        Arc::new(toasts.clone()),
        Arc::new(SettingsStore::new(config.providers)),
    );

    let trigger = MenuTrigger {
        message,
        href: Some(href),
        is_attachment: attachment,
    };
    let result = use_case.run(&trigger).await;
    debug!(stats = %cache.stats(), "Embed cache");

    for toast in toasts.drain() {
        eprintln!("{}", toast.message);
    }

    match result {
        Ok(Some(embeds)) => {
            println!("{}", serde_json::to_string_pretty(&embeds)?);
            Ok(())
        }
        Ok(None) => {
            info!("Link is not eligible for an embed");
            Ok(())
        }
        Err(e) if e.is_silent() => Ok(()),
        Err(e) => Err(e.into()),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    dotenvy::dotenv().ok();

    let args = CliArgs::parse();
    let config = load_config(&args)?;

    init_logging(&config)?;

    info!(version = oxiembed::VERSION, "Starting {}", oxiembed::NAME);

    match args.command {
        Command::Normalize { url } => normalize(&config, &url),
        Command::Unfurl {
            message,
            href,
            attachment,
        } => unfurl(&config, &message, href, attachment).await,
    }
}
