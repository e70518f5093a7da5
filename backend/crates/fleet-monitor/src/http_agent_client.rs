use crate::{AgentApi, MonitorError, Result};

use std::collections::BTreeMap;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use fleet_core::{BotAction, BotDescriptor, BotRuntimeStatus, ServerDescriptor, ServerStatus};
use log::{error, info};
use reqwest::StatusCode;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Health document served by an agent at `GET /health`.
///
/// Missing or null fields read as "nothing running"; a bot entry that is not
/// an object counts as stopped.
#[derive(Debug, Deserialize)]
struct HealthDocument {
    #[serde(default, deserialize_with = "lenient_bots")]
    bots_status: BTreeMap<String, BotRuntimeStatus>,
    #[serde(default, deserialize_with = "lenient_flag")]
    all_bots_running: bool,
}

fn lenient_flag<'de, D>(deserializer: D) -> std::result::Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(raw.and_then(|v| v.as_bool()).unwrap_or(false))
}

fn lenient_bots<'de, D>(
    deserializer: D,
) -> std::result::Result<BTreeMap<String, BotRuntimeStatus>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Map<String, Value>>::deserialize(deserializer)?;
    Ok(raw
        .unwrap_or_default()
        .into_iter()
        .map(|(bot_id, entry)| (bot_id, bot_status(entry)))
        .collect())
}

fn bot_status(entry: Value) -> BotRuntimeStatus {
    match entry {
        Value::Object(mut detail) => {
            let running = detail
                .remove("running")
                .and_then(|v| v.as_bool())
                .unwrap_or(false);
            BotRuntimeStatus { running, detail }
        }
        _ => BotRuntimeStatus::stopped(),
    }
}

/// Body of `POST /start_bot` and `POST /stop_bot`.
#[derive(Debug, Serialize)]
struct AgentCommand<'a> {
    bot_id: &'a str,
    command: &'a str,
}

/// reqwest-backed [`AgentApi`]. Every request uses the same timeout.
pub struct HttpAgentClient {
    http: reqwest::Client,
}

impl HttpAgentClient {
    pub fn new(timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| MonitorError::internal(format!("failed to build agent client: {e}")))?;

        Ok(Self { http })
    }

    async fn send_command(
        &self,
        server: &ServerDescriptor,
        bot_id: &str,
        bot: &BotDescriptor,
        action: BotAction,
    ) -> bool {
        let command = match action {
            BotAction::Start => bot.start_command.as_str(),
            BotAction::Stop => bot.stop_command.as_str(),
        };
        let url = server.agent_endpoint(action.agent_path());

        let result = self
            .http
            .post(&url)
            .json(&AgentCommand { bot_id, command })
            .send()
            .await;

        match result {
            Ok(response) if response.status() == StatusCode::OK => {
                info!("Bot {} {} on server {}", bot.name, past_tense(action), server.name);
                true
            }
            Ok(response) => {
                error!(
                    "Failed to {} bot {} on server {}: HTTP {}",
                    action,
                    bot.name,
                    server.name,
                    response.status().as_u16()
                );
                false
            }
            Err(e) => {
                error!(
                    "Failed to {} bot {} on server {}: {}",
                    action, bot.name, server.name, e
                );
                false
            }
        }
    }
}

fn past_tense(action: BotAction) -> &'static str {
    match action {
        BotAction::Start => "started",
        BotAction::Stop => "stopped",
    }
}

/// Classify a 200 body: a JSON object with the health fields is online,
/// anything else is an error.
fn classify_body(body: Value, response_time: f64) -> ServerStatus {
    if !body.is_object() {
        return ServerStatus::error("invalid health document: expected a JSON object");
    }

    match serde_json::from_value::<HealthDocument>(body.clone()) {
        Ok(doc) => ServerStatus::online(
            doc.bots_status,
            doc.all_bots_running,
            Some(response_time),
            Some(body),
        ),
        Err(e) => ServerStatus::error(format!("invalid health document: {e}")),
    }
}

#[async_trait]
impl AgentApi for HttpAgentClient {
    async fn check_health(&self, server: &ServerDescriptor) -> ServerStatus {
        let url = server.agent_endpoint("/health");
        let started = Instant::now();

        match self.http.get(&url).send().await {
            Ok(response) if response.status() == StatusCode::OK => {
                let response_time = started.elapsed().as_secs_f64();
                match response.json::<Value>().await {
                    Ok(body) => classify_body(body, response_time),
                    Err(e) => ServerStatus::error(format!("invalid health response: {e}")),
                }
            }
            Ok(response) => ServerStatus::error(format!("HTTP {}", response.status().as_u16())),
            Err(e) => ServerStatus::offline(e.to_string()),
        }
    }

    async fn start_bot(&self, server: &ServerDescriptor, bot_id: &str, bot: &BotDescriptor) -> bool {
        self.send_command(server, bot_id, bot, BotAction::Start).await
    }

    async fn stop_bot(&self, server: &ServerDescriptor, bot_id: &str, bot: &BotDescriptor) -> bool {
        self.send_command(server, bot_id, bot, BotAction::Stop).await
    }
}
