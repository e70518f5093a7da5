use crate::{ConfigError, ConfigErrorResult, DEFAULT_TELEGRAM_API_BASE};

use std::time::Duration;

use serde::Deserialize;

pub const MIN_NOTIFICATION_TIMEOUT_SECS: u64 = 1;
pub const MAX_NOTIFICATION_TIMEOUT_SECS: u64 = 120;
pub const DEFAULT_NOTIFICATION_TIMEOUT_SECS: u64 = 10;

/// Telegram alert channel. Alerts are only delivered when both the bot
/// token and the chat id are set; otherwise they are written to the log.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct NotificationConfig {
    pub telegram_bot_token: Option<String>,
    pub telegram_chat_id: Option<String>,
    pub telegram_api_base: String,
    pub timeout_secs: u64,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            telegram_bot_token: None,
            telegram_chat_id: None,
            telegram_api_base: String::from(DEFAULT_TELEGRAM_API_BASE),
            timeout_secs: DEFAULT_NOTIFICATION_TIMEOUT_SECS,
        }
    }
}

impl NotificationConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.telegram_api_base.trim().is_empty() {
            return Err(ConfigError::notification(
                "notification.telegram_api_base cannot be empty",
            ));
        }

        if self.timeout_secs < MIN_NOTIFICATION_TIMEOUT_SECS
            || self.timeout_secs > MAX_NOTIFICATION_TIMEOUT_SECS
        {
            return Err(ConfigError::notification(format!(
                "notification.timeout_secs must be {}-{}, got {}",
                MIN_NOTIFICATION_TIMEOUT_SECS, MAX_NOTIFICATION_TIMEOUT_SECS, self.timeout_secs
            )));
        }

        Ok(())
    }

    /// Token and chat id, when both are configured and non-empty.
    pub fn telegram_credentials(&self) -> Option<(&str, &str)> {
        match (&self.telegram_bot_token, &self.telegram_chat_id) {
            (Some(token), Some(chat)) if !token.is_empty() && !chat.is_empty() => {
                Some((token.as_str(), chat.as_str()))
            }
            _ => None,
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
