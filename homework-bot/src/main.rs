//! Homework Bot
//!
//! A polling agent that watches homework review statuses and announces
//! every change in a Telegram chat.
//!
//! Architecture:
//! - Configuration: secrets and tunables from the environment
//! - Services: seams to the review API and the chat API
//! - Scheduler: the poll cycle and its fixed-interval loop
//!
//! The bot keeps a single cursor in memory; nothing survives a restart.

mod config;
mod scheduler;
mod service;
#[cfg(test)]
mod test_support;

use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use tracing::{Subscriber, error, info};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{
    EnvFilter, Layer, Registry, layer::SubscriberExt, util::SubscriberInitExt,
};

use crate::config::Config;
use crate::scheduler::StatusPoller;
use homework_client::{PracticumClient, TelegramClient};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let config = Config::from_env();

    init_logging(&config)?;

    info!("Starting Homework Bot");

    if !config.check_tokens() {
        anyhow::bail!("Required environment variables are missing, stopping");
    }
    config.validate()?;

    let credentials = config
        .credentials()
        .context("Credentials unavailable after token check")?;
    info!("Loaded configuration: {:?}", config);

    let practicum = PracticumClient::new(config.endpoint.clone(), credentials.practicum_token);
    let telegram =
        TelegramClient::with_base_url(config.telegram_api_url.clone(), credentials.telegram_token);

    let mut poller = StatusPoller::new(
        practicum,
        telegram,
        credentials.telegram_chat_id,
        config.retry_interval,
    );

    if let Err(e) = poller.run().await {
        error!("Poller error: {}", e);
        return Err(e);
    }

    Ok(())
}

/// Default filter for the stdout sink, overridden by `RUST_LOG`
const STDOUT_LOG_FILTER: &str = "homework_bot=info,homework_client=info,homework_core=info";

/// Filter for the file sink, which also keeps debug events
const FILE_LOG_FILTER: &str = "homework_bot=debug,homework_client=debug,homework_core=debug";

/// Installs the stdout log layer and, when configured, a file layer
fn init_logging(config: &Config) -> Result<()> {
    let file_sink = config
        .log_file
        .as_deref()
        .map(file_layer::<Registry>)
        .transpose()?;

    let stdout_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| STDOUT_LOG_FILTER.into());

    tracing_subscriber::registry()
        .with(file_sink)
        .with(tracing_subscriber::fmt::layer().with_filter(stdout_filter))
        .init();

    Ok(())
}

/// Plain-text layer appending debug and above to `path`
fn file_layer<S>(path: &Path) -> Result<impl Layer<S>>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    Ok(tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .with_filter(EnvFilter::new(FILE_LOG_FILTER)))
}
