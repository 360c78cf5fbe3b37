use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, info};

use crate::dto::telegram_dto::{ApiResponse, SendMessage, SetWebhook, Update};
use crate::error::{BotError, BotResult};

const TELEGRAM_API_BASE: &str = "https://api.telegram.org";
const LONG_POLL_SECS: u64 = 30;

/// Outbound side of the messaging transport.
#[async_trait]
pub trait Messenger: Send + Sync {
    async fn send_text(&self, chat_id: i64, text: &str) -> BotResult<()>;
}

pub struct TelegramClient {
    client: Client,
    token: String,
}

impl TelegramClient {
    pub fn new(client: Client, token: String) -> Self {
        Self { client, token }
    }

    fn method_url(&self, method: &str) -> String {
        format!("{}/bot{}/{}", TELEGRAM_API_BASE, self.token, method)
    }

    async fn call<B, T>(&self, method: &str, body: &B) -> BotResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response: ApiResponse<T> = self
            .client
            .post(self.method_url(method))
            .json(body)
            .send()
            .await?
            .json()
            .await?;

        if !response.ok {
            return Err(BotError::Telegram(format!(
                "{} failed: {}",
                method,
                response.description.unwrap_or_default()
            )));
        }

        response
            .result
            .ok_or_else(|| BotError::Telegram(format!("{} returned no result", method)))
    }

    /// Long-poll for updates after `offset`.
    pub async fn get_updates(&self, offset: i64) -> BotResult<Vec<Update>> {
        let body = serde_json::json!({
            "offset": offset,
            "timeout": LONG_POLL_SECS,
            "allowed_updates": ["message"],
        });
        let updates: Vec<Update> = self.call("getUpdates", &body).await?;
        debug!("Received {} updates.", updates.len());
        Ok(updates)
    }

    pub async fn set_webhook(&self, url: &str, secret_token: Option<&str>) -> BotResult<()> {
        let _: bool = self.call("setWebhook", &SetWebhook { url, secret_token }).await?;
        info!("Registered webhook {}.", url);
        Ok(())
    }

    /// Polling is rejected by Telegram while a webhook is registered.
    pub async fn delete_webhook(&self) -> BotResult<()> {
        let _: bool = self.call("deleteWebhook", &serde_json::json!({})).await?;
        Ok(())
    }
}

#[async_trait]
impl Messenger for TelegramClient {
    async fn send_text(&self, chat_id: i64, text: &str) -> BotResult<()> {
        let _: serde_json::Value = self.call("sendMessage", &SendMessage { chat_id, text }).await?;
        Ok(())
    }
}
