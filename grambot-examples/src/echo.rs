//! Echo bot: replies to `/echo some text` with `some text`.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Local;
use grambot_core::{Handler, HandlerError, HandlerRegistry, Message};
use grambot_telegram::{run_bot, BotConfig, TelegramApi};
use tracing::info;

/// Sends the command's remaining text back to the chat it came from.
struct EchoHandler {
    api: Arc<TelegramApi>,
}

#[async_trait]
impl Handler for EchoHandler {
    async fn handle(&self, message: &Message) -> Result<(), HandlerError> {
        let text = message.text.as_deref().unwrap_or("");
        info!(
            chat_id = message.chat_id(),
            message_content = %text,
            "echoing message"
        );
        self.api
            .send_message(message.chat_id(), text, Some(message.id))
            .await?;
        Ok(())
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    let config = BotConfig::load(None)?;

    run_bot(config, |api| {
        let mut registry = HandlerRegistry::new();
        registry.register_command("echo", Arc::new(EchoHandler { api }));
        info!(
            start_time = %Local::now().format("%Y-%m-%d %H:%M:%S"),
            "Echo Bot started"
        );
        registry
    })
    .await
}
