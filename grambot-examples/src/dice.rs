//! Dice bot: `/roll` (or the bare text "roll") sends a randomized dice
//! animation to the chat.

use std::sync::Arc;

use grambot_core::{handler_fn, HandlerError, HandlerRegistry};
use grambot_telegram::{run_bot, BotConfig, TelegramApi};
use tracing::info;

fn roll_handler(api: Arc<TelegramApi>) -> Arc<dyn grambot_core::Handler> {
    handler_fn(move |message| {
        let api = api.clone();
        async move {
            info!(chat_id = message.chat_id(), "rolling the dice");
            api.send_dice(message.chat_id(), Some("🎲"), None).await?;
            Ok::<(), HandlerError>(())
        }
    })
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    let config = BotConfig::load(None)?;

    run_bot(config, |api| {
        let mut registry = HandlerRegistry::new();
        registry.register_command("roll", roll_handler(api.clone()));
        registry.register_text("roll", roll_handler(api));
        registry
    })
    .await
}
