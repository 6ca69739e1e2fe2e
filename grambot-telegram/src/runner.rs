//! Main entry: init logging, validate config, build the API client, create
//! the registry via a factory, then run the core bot until shutdown.

use std::sync::Arc;

use anyhow::Result;
use grambot_core::{init_tracing, Bot, HandlerRegistry};
use tracing::{info, instrument};

use crate::api::TelegramApi;
use crate::config::BotConfig;

/// Runs the bot end to end. The factory receives the shared [`TelegramApi`]
/// (for handlers that send replies) and returns the fully registered
/// [`HandlerRegistry`]; registration is therefore complete before the
/// dispatch loop starts.
#[instrument(skip(config, make_registry))]
pub async fn run_bot<F>(config: BotConfig, make_registry: F) -> Result<()>
where
    F: FnOnce(Arc<TelegramApi>) -> HandlerRegistry,
{
    config.validate()?;

    if let Some(parent) = std::path::Path::new(&config.log_file).parent() {
        std::fs::create_dir_all(parent)?;
    }
    init_tracing(&config.log_file)?;

    let api = match &config.telegram_api_url {
        Some(base_url) => TelegramApi::with_base_url(&config.bot_token, base_url),
        None => TelegramApi::new(&config.bot_token),
    };
    let api = Arc::new(api);
    let registry = make_registry(api.clone());

    info!(
        poll_interval_ms = config.poll_interval_ms,
        queue_capacity = config.queue_capacity,
        "starting bot"
    );

    let bot = Bot::new(api, registry)
        .with_poll_interval(config.poll_interval())
        .with_queue_capacity(config.queue_capacity);
    bot.run().await?;

    Ok(())
}
