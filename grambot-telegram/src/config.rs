//! Bot config: Telegram connection, polling, queue, logging. Loaded from env.

use anyhow::Result;
use std::env;
use std::time::Duration;

/// Env-backed configuration for a grambot binary.
#[derive(Debug, Clone)]
pub struct BotConfig {
    /// BOT_TOKEN
    pub bot_token: String,
    /// TELEGRAM_API_URL — base URL override (self-hosted Bot API server)
    pub telegram_api_url: Option<String>,
    /// POLL_INTERVAL_MS — sleep between update fetches
    pub poll_interval_ms: u64,
    /// QUEUE_CAPACITY — hand-off queue bound between poller and dispatcher
    pub queue_capacity: usize,
    /// LOG_FILE
    pub log_file: String,
}

impl BotConfig {
    /// Load from environment variables. `token` overrides BOT_TOKEN if
    /// provided; everything else has a default.
    pub fn load(token: Option<String>) -> Result<Self> {
        let bot_token = match token {
            Some(token) => token,
            None => env::var("BOT_TOKEN").map_err(|_| anyhow::anyhow!("BOT_TOKEN not set"))?,
        };
        let telegram_api_url = env::var("TELEGRAM_API_URL").ok();
        let poll_interval_ms = env::var("POLL_INTERVAL_MS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(100);
        let queue_capacity = env::var("QUEUE_CAPACITY")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(64);
        let log_file = env::var("LOG_FILE").unwrap_or_else(|_| "logs/grambot.log".to_string());

        Ok(Self {
            bot_token,
            telegram_api_url,
            poll_interval_ms,
            queue_capacity,
            log_file,
        })
    }

    /// Construct with the given token and defaults for everything else.
    pub fn with_token(bot_token: String) -> Self {
        Self {
            bot_token,
            telegram_api_url: None,
            poll_interval_ms: 100,
            queue_capacity: 64,
            log_file: "logs/grambot.log".to_string(),
        }
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    /// Validate config (API URL must parse if set; queue must have room).
    pub fn validate(&self) -> Result<()> {
        if let Some(ref url_str) = self.telegram_api_url {
            if reqwest::Url::parse(url_str).is_err() {
                anyhow::bail!("TELEGRAM_API_URL is set but not a valid URL: {}", url_str);
            }
        }
        if self.queue_capacity == 0 {
            anyhow::bail!("QUEUE_CAPACITY must be at least 1");
        }
        Ok(())
    }
}
