//! Telegram-style bot API sender.

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, Secret};

use crate::config::NotificationConfig;
use crate::ports::{MessageSender, SendError};

/// HTTP client for the bot API with the configured per-call timeout.
pub fn build_client(config: &NotificationConfig) -> Result<Client, reqwest::Error> {
    Client::builder().timeout(config.timeout()).build()
}

/// Posts `sendMessage` as a form with HTML parse mode.
pub struct TelegramSender {
    client: Client,
    base_url: String,
    token: Secret<String>,
}

impl TelegramSender {
    pub fn new(client: Client, base_url: impl Into<String>, token: Secret<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            token,
        }
    }
}

#[async_trait]
impl MessageSender for TelegramSender {
    async fn send(&self, chat_id: &str, text: &str) -> Result<(), SendError> {
        let chat_id = chat_id.trim();
        if chat_id.is_empty() {
            return Ok(());
        }

        let url = format!(
            "{}/bot{}/sendMessage",
            self.base_url.trim_end_matches('/'),
            self.token.expose_secret()
        );

        let response = self
            .client
            .post(&url)
            .form(&[("chat_id", chat_id), ("text", text), ("parse_mode", "HTML")])
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    SendError::Timeout
                } else {
                    // reqwest errors embed the URL, which carries the token
                    SendError::Transport(e.without_url().to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(SendError::Rejected(status.as_u16()));
        }
        Ok(())
    }
}
