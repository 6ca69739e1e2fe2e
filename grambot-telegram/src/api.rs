//! Telegram Bot API client.
//!
//! [`TelegramApi`] posts JSON to `https://api.telegram.org/bot{token}/{method}`
//! and unwraps the `{ok, result, description}` envelope. It implements the
//! core [`Transport`] trait for the inbound operations (getMe, getUpdates)
//! and exposes the outbound sends as thin payload-shaping wrappers; media
//! arguments are file ids or HTTP URLs.

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use grambot_core::{BotIdentity, Transport, TransportError, Update};

const TELEGRAM_API_BASE: &str = "https://api.telegram.org";

/// Reqwest-based Telegram Bot API client. Cheap to clone; handlers usually
/// hold it in an `Arc` and call the send operations to reply.
#[derive(Debug, Clone)]
pub struct TelegramApi {
    client: Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct ApiResponse<T> {
    ok: bool,
    result: Option<T>,
    description: Option<String>,
}

impl TelegramApi {
    /// Creates a client for the hosted Telegram API.
    pub fn new(token: &str) -> Self {
        Self::with_base_url(token, TELEGRAM_API_BASE)
    }

    /// Creates a client against a custom API base URL (self-hosted Bot API
    /// server, or a mock server in tests).
    pub fn with_base_url(token: &str, base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: format!("{}/bot{}", base_url.trim_end_matches('/'), token),
        }
    }

    async fn call<T: DeserializeOwned>(
        &self,
        method: &str,
        payload: &impl Serialize,
    ) -> Result<T, TransportError> {
        let url = format!("{}/{}", self.base_url, method);
        debug!(method = method, "calling telegram api");

        let response = self
            .client
            .post(&url)
            .json(payload)
            .send()
            .await
            .map_err(|e| TransportError::Request(e.to_string()))?;

        let envelope: ApiResponse<T> = response
            .json()
            .await
            .map_err(|e| TransportError::Request(e.to_string()))?;

        if !envelope.ok {
            return Err(TransportError::Api(
                envelope
                    .description
                    .unwrap_or_else(|| "unknown api error".to_string()),
            ));
        }
        envelope
            .result
            .ok_or_else(|| TransportError::Api("response missing result".to_string()))
    }

    /// <https://core.telegram.org/bots/api#sendmessage>
    pub async fn send_message(
        &self,
        chat_id: i64,
        text: &str,
        reply_to_message_id: Option<i64>,
    ) -> Result<Value, TransportError> {
        self.call(
            "sendMessage",
            &SendMessageRequest {
                chat_id,
                text,
                reply_to_message_id,
            },
        )
        .await
    }

    /// <https://core.telegram.org/bots/api#sendphoto>
    pub async fn send_photo(
        &self,
        chat_id: i64,
        photo: &str,
        options: &PhotoOptions,
    ) -> Result<Value, TransportError> {
        self.call(
            "sendPhoto",
            &MediaRequest {
                chat_id,
                media: Media::Photo(photo),
                options,
            },
        )
        .await
    }

    /// <https://core.telegram.org/bots/api#sendaudio>
    pub async fn send_audio(
        &self,
        chat_id: i64,
        audio: &str,
        options: &AudioOptions,
    ) -> Result<Value, TransportError> {
        self.call(
            "sendAudio",
            &MediaRequest {
                chat_id,
                media: Media::Audio(audio),
                options,
            },
        )
        .await
    }

    /// <https://core.telegram.org/bots/api#senddocument>
    pub async fn send_document(
        &self,
        chat_id: i64,
        document: &str,
        options: &DocumentOptions,
    ) -> Result<Value, TransportError> {
        self.call(
            "sendDocument",
            &MediaRequest {
                chat_id,
                media: Media::Document(document),
                options,
            },
        )
        .await
    }

    /// <https://core.telegram.org/bots/api#sendvideo>
    pub async fn send_video(
        &self,
        chat_id: i64,
        video: &str,
        options: &VideoOptions,
    ) -> Result<Value, TransportError> {
        self.call(
            "sendVideo",
            &MediaRequest {
                chat_id,
                media: Media::Video(video),
                options,
            },
        )
        .await
    }

    /// <https://core.telegram.org/bots/api#sendvoice>
    pub async fn send_voice(
        &self,
        chat_id: i64,
        voice: &str,
        options: &VoiceOptions,
    ) -> Result<Value, TransportError> {
        self.call(
            "sendVoice",
            &MediaRequest {
                chat_id,
                media: Media::Voice(voice),
                options,
            },
        )
        .await
    }

    /// <https://core.telegram.org/bots/api#senddice>
    pub async fn send_dice(
        &self,
        chat_id: i64,
        emoji: Option<&str>,
        reply_to_message_id: Option<i64>,
    ) -> Result<Value, TransportError> {
        self.call(
            "sendDice",
            &SendDiceRequest {
                chat_id,
                emoji,
                reply_to_message_id,
            },
        )
        .await
    }
}

#[async_trait]
impl Transport for TelegramApi {
    /// <https://core.telegram.org/bots/api#getme>
    async fn get_me(&self) -> Result<BotIdentity, TransportError> {
        self.call("getMe", &serde_json::json!({})).await
    }

    /// <https://core.telegram.org/bots/api#getupdates>
    async fn get_updates(&self, offset: Option<i64>) -> Result<Vec<Update>, TransportError> {
        self.call("getUpdates", &GetUpdatesRequest { offset }).await
    }
}

#[derive(Debug, Serialize)]
struct GetUpdatesRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    offset: Option<i64>,
}

#[derive(Debug, Serialize)]
struct SendMessageRequest<'a> {
    chat_id: i64,
    text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    reply_to_message_id: Option<i64>,
}

#[derive(Debug, Serialize)]
struct SendDiceRequest<'a> {
    chat_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    emoji: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    reply_to_message_id: Option<i64>,
}

/// The media field under its method-specific key (`photo`, `audio`, …).
#[derive(Debug, Serialize)]
enum Media<'a> {
    #[serde(rename = "photo")]
    Photo(&'a str),
    #[serde(rename = "audio")]
    Audio(&'a str),
    #[serde(rename = "document")]
    Document(&'a str),
    #[serde(rename = "video")]
    Video(&'a str),
    #[serde(rename = "voice")]
    Voice(&'a str),
}

#[derive(Debug, Serialize)]
struct MediaRequest<'a, O: Serialize> {
    chat_id: i64,
    #[serde(flatten)]
    media: Media<'a>,
    #[serde(flatten)]
    options: &'a O,
}

/// Optional fields of `sendPhoto`.
#[derive(Debug, Default, Serialize)]
pub struct PhotoOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to_message_id: Option<i64>,
}

/// Optional fields of `sendAudio`.
#[derive(Debug, Default, Serialize)]
pub struct AudioOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub performer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumb: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to_message_id: Option<i64>,
}

/// Optional fields of `sendDocument`.
#[derive(Debug, Default, Serialize)]
pub struct DocumentOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumb: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to_message_id: Option<i64>,
}

/// Optional fields of `sendVideo`.
#[derive(Debug, Default, Serialize)]
pub struct VideoOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumb: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to_message_id: Option<i64>,
}

/// Optional fields of `sendVoice`.
#[derive(Debug, Default, Serialize)]
pub struct VoiceOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to_message_id: Option<i64>,
}
