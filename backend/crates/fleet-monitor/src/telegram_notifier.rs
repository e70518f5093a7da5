use crate::{MonitorError, NotificationSink, Result};

use std::time::Duration;

use async_trait::async_trait;
use log::{error, info};

/// Telegram bot channel (`sendMessage`).
pub struct TelegramNotifier {
    api_base: String,
    bot_token: String,
    chat_id: String,
    client: reqwest::Client,
}

impl TelegramNotifier {
    pub fn new(
        api_base: impl Into<String>,
        bot_token: impl Into<String>,
        chat_id: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| MonitorError::internal(format!("failed to build Telegram client: {e}")))?;

        Ok(Self {
            api_base: api_base.into(),
            bot_token: bot_token.into(),
            chat_id: chat_id.into(),
            client,
        })
    }

    pub(crate) async fn deliver(&self, text: &str) -> Result<()> {
        let url = format!(
            "{}/bot{}/sendMessage",
            self.api_base.trim_end_matches('/'),
            self.bot_token
        );

        let payload = serde_json::json!({
            "chat_id": self.chat_id,
            "text": text,
        });

        let response = self
            .client
            .post(&url)
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                // the request URL embeds the bot token
                MonitorError::notification(format!("Telegram request failed: {}", e.without_url()))
            })?;

        if response.status().is_success() {
            Ok(())
        } else {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            Err(MonitorError::notification(format!(
                "Telegram API returned {}: {}",
                status, body
            )))
        }
    }
}

#[async_trait]
impl NotificationSink for TelegramNotifier {
    fn name(&self) -> &str {
        "telegram"
    }

    async fn send(&self, text: &str) {
        match self.deliver(text).await {
            Ok(()) => info!("Telegram notification sent: {text}"),
            Err(e) => error!("{e}"),
        }
    }
}
