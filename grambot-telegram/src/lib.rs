//! # grambot-telegram
//!
//! Telegram Bot API layer for grambot: the reqwest-based [`TelegramApi`]
//! client (implements [`grambot_core::Transport`] and carries the outbound
//! send operations), env-based [`BotConfig`], and the [`run_bot`] entry
//! point. Handles only Telegram connectivity; the pipeline lives in
//! grambot-core.

mod api;
mod config;
mod runner;

pub use api::{
    AudioOptions, DocumentOptions, PhotoOptions, TelegramApi, VideoOptions, VoiceOptions,
};
pub use config::BotConfig;
pub use runner::run_bot;
