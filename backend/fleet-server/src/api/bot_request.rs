use serde::Deserialize;

/// Body of `POST /api/{start,stop,restart}_bot`
#[derive(Debug, Default, Deserialize)]
pub struct BotRequest {
    pub server: Option<String>,
    pub bot_id: Option<String>,
}
