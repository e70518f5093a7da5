use crate::{LogNotifier, Result, TelegramNotifier};

use std::sync::Arc;

use async_trait::async_trait;
use fleet_config::NotificationConfig;

/// Outbound alert channel for failover announcements.
///
/// Delivery is fire-and-forget: implementations log failures and never
/// surface them to the caller.
#[async_trait]
pub trait NotificationSink: Send + Sync {
    fn name(&self) -> &str;

    async fn send(&self, text: &str);
}

/// Telegram when both credentials are configured, otherwise the log.
pub fn notifier_from_config(config: &NotificationConfig) -> Result<Arc<dyn NotificationSink>> {
    match config.telegram_credentials() {
        Some((token, chat_id)) => Ok(Arc::new(TelegramNotifier::new(
            &config.telegram_api_base,
            token,
            chat_id,
            config.timeout(),
        )?)),
        None => Ok(Arc::new(LogNotifier)),
    }
}
