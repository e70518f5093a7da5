use crate::NotificationSink;

use async_trait::async_trait;
use log::warn;

/// Fallback when no alert channel is configured.
pub struct LogNotifier;

#[async_trait]
impl NotificationSink for LogNotifier {
    fn name(&self) -> &str {
        "log"
    }

    async fn send(&self, text: &str) {
        warn!("Telegram is not configured, notification not delivered: {text}");
    }
}
