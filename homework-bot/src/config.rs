//! Bot configuration
//!
//! Defines the secrets and tunables of the bot, loaded from environment
//! variables, plus the startup check for the required secrets.

use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::error;

use homework_client::{PRACTICUM_ENDPOINT, TELEGRAM_API_URL};

/// Default pause between poll cycles
const DEFAULT_RETRY_TIME: Duration = Duration::from_secs(600);

pub const PRACTICUM_TOKEN: &str = "PRACTICUM_TOKEN";
pub const TELEGRAM_TOKEN: &str = "TELEGRAM_TOKEN";
pub const TELEGRAM_CHAT_ID: &str = "TELEGRAM_CHAT_ID";

/// Bot configuration
///
/// Secrets are optional here so that a missing one can be reported by
/// [`Config::check_tokens`] instead of failing the load itself.
#[derive(Clone)]
pub struct Config {
    /// OAuth token for the review API
    pub practicum_token: Option<String>,

    /// Telegram bot token
    pub telegram_token: Option<String>,

    /// Chat that receives the notifications
    pub telegram_chat_id: Option<String>,

    /// Homework statuses endpoint
    pub endpoint: String,

    /// Telegram Bot API base URL
    pub telegram_api_url: String,

    /// Pause between poll cycles
    pub retry_interval: Duration,

    /// Optional file that receives a copy of the logs
    pub log_file: Option<PathBuf>,
}

/// The three required secrets, once all of them are known to be present
#[derive(Clone)]
pub struct Credentials {
    pub practicum_token: String,
    pub telegram_token: String,
    pub telegram_chat_id: String,
}

impl Config {
    /// Creates configuration from environment variables and `./.env`
    ///
    /// Expected environment variables:
    /// - PRACTICUM_TOKEN (required)
    /// - TELEGRAM_TOKEN (required)
    /// - TELEGRAM_CHAT_ID (required)
    /// - PRACTICUM_ENDPOINT (optional, default: Practicum homework statuses URL)
    /// - TELEGRAM_API_URL (optional, default: https://api.telegram.org)
    /// - RETRY_TIME (optional, seconds, default: 600)
    /// - LOG_FILE (optional, path)
    pub fn from_env() -> Self {
        Self::from_env_file(".env")
    }

    /// Creates configuration from environment variables, falling back to a dotenv file
    ///
    /// Process variables win over the file. A missing or unreadable file is
    /// not an error; its unparsable lines are skipped.
    pub fn from_env_file(path: impl AsRef<Path>) -> Self {
        let file_vars: HashMap<String, String> = dotenvy::from_path_iter(path.as_ref())
            .map(|vars| vars.filter_map(|item| item.ok()).collect())
            .unwrap_or_default();

        Self::from_lookup(|key| std::env::var(key).ok().or_else(|| file_vars.get(key).cloned()))
    }

    /// Creates configuration from an arbitrary variable lookup
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|value| !value.is_empty());

        let retry_interval = var("RETRY_TIME")
            .and_then(|s| s.parse::<u64>().ok())
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_RETRY_TIME);

        Self {
            practicum_token: var(PRACTICUM_TOKEN),
            telegram_token: var(TELEGRAM_TOKEN),
            telegram_chat_id: var(TELEGRAM_CHAT_ID),
            endpoint: var("PRACTICUM_ENDPOINT").unwrap_or_else(|| PRACTICUM_ENDPOINT.to_string()),
            telegram_api_url: var("TELEGRAM_API_URL")
                .unwrap_or_else(|| TELEGRAM_API_URL.to_string()),
            retry_interval,
            log_file: var("LOG_FILE").map(PathBuf::from),
        }
    }

    /// Names of the required secrets that are not set
    pub fn missing_tokens(&self) -> Vec<&'static str> {
        [
            (PRACTICUM_TOKEN, &self.practicum_token),
            (TELEGRAM_TOKEN, &self.telegram_token),
            (TELEGRAM_CHAT_ID, &self.telegram_chat_id),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_none())
        .map(|(name, _)| name)
        .collect()
    }

    /// Checks that every required secret is set
    ///
    /// Logs one error per missing variable.
    pub fn check_tokens(&self) -> bool {
        let missing = self.missing_tokens();
        for name in &missing {
            error!("Missing required environment variable: {}", name);
        }
        missing.is_empty()
    }

    /// Returns the secrets if all of them are set
    pub fn credentials(&self) -> Option<Credentials> {
        Some(Credentials {
            practicum_token: self.practicum_token.clone()?,
            telegram_token: self.telegram_token.clone()?,
            telegram_chat_id: self.telegram_chat_id.clone()?,
        })
    }

    /// Validates the configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        for (name, url) in [
            ("endpoint", &self.endpoint),
            ("telegram_api_url", &self.telegram_api_url),
        ] {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                anyhow::bail!("{} must start with http:// or https://", name);
            }
        }

        if self.retry_interval.as_secs() == 0 {
            anyhow::bail!("retry_interval must be greater than 0");
        }

        Ok(())
    }
}

fn presence(value: &Option<String>) -> &'static str {
    if value.is_some() { "<set>" } else { "<missing>" }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("practicum_token", &presence(&self.practicum_token))
            .field("telegram_token", &presence(&self.telegram_token))
            .field("telegram_chat_id", &self.telegram_chat_id)
            .field("endpoint", &self.endpoint)
            .field("telegram_api_url", &self.telegram_api_url)
            .field("retry_interval", &self.retry_interval)
            .field("log_file", &self.log_file)
            .finish()
    }
}
