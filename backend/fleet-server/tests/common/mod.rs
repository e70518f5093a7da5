#![allow(dead_code)]

//! Test infrastructure for fleet-server API tests

use fleet_core::{
    BotDescriptor, BotRuntimeStatus, Fleet, ServerDescriptor, ServerStatus, SwitchPolicy,
};
use fleet_monitor::{AgentApi, Coordinator, MonitorSettings, NotificationSink};
use fleet_server::AppState;

use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use tower::ServiceExt;

/// Agent stub: configurable health, commands succeed unless the bot is listed
#[derive(Default)]
pub struct StubAgent {
    pub health: Mutex<HashMap<String, ServerStatus>>,
    pub failing: Mutex<HashSet<String>>,
    pub commands: Mutex<Vec<String>>,
}

impl StubAgent {
    pub fn fail_bot(&self, bot_id: &str) {
        self.failing.lock().unwrap().insert(bot_id.to_string());
    }

    pub fn commands(&self) -> Vec<String> {
        self.commands.lock().unwrap().clone()
    }

    fn command(&self, action: &str, server: &ServerDescriptor, bot_id: &str) -> bool {
        self.commands
            .lock()
            .unwrap()
            .push(format!("{action} {} {bot_id}", server.key));
        !self.failing.lock().unwrap().contains(bot_id)
    }
}

#[async_trait]
impl AgentApi for StubAgent {
    async fn check_health(&self, server: &ServerDescriptor) -> ServerStatus {
        self.health
            .lock()
            .unwrap()
            .get(&server.key)
            .cloned()
            .unwrap_or_else(|| ServerStatus::offline("unreachable"))
    }

    async fn start_bot(&self, server: &ServerDescriptor, bot_id: &str, _bot: &BotDescriptor) -> bool {
        self.command("start", server, bot_id)
    }

    async fn stop_bot(&self, server: &ServerDescriptor, bot_id: &str, _bot: &BotDescriptor) -> bool {
        self.command("stop", server, bot_id)
    }
}

pub struct NullNotifier;

#[async_trait]
impl NotificationSink for NullNotifier {
    fn name(&self) -> &str {
        "null"
    }

    async fn send(&self, _text: &str) {}
}

pub fn test_fleet() -> Fleet {
    let server = |n: u32| {
        let bots = (1..=2)
            .map(|b| {
                (
                    format!("bot{b}"),
                    BotDescriptor::new(
                        format!("Bot {b}"),
                        format!("python bot{b}.py"),
                        format!("pkill -f bot{b}.py"),
                        format!("bot{b}.py"),
                    ),
                )
            })
            .collect();
        ServerDescriptor {
            key: format!("server{n}"),
            id: n,
            name: format!("Server {n}"),
            agent_url: format!("http://server{n}:500{n}"),
            root_path: format!("/srv/server{n}"),
            is_primary: n == 1,
            bots,
        }
    };
    Fleet::new(vec![server(1), server(2)]).unwrap()
}

pub fn test_settings() -> MonitorSettings {
    MonitorSettings {
        interval: Duration::from_millis(50),
        announcement_delay: Duration::from_secs(60),
        restart_settle: Duration::ZERO,
        auto_restart: true,
        switch_policy: SwitchPolicy::Unconditional,
    }
}

pub fn healthy() -> ServerStatus {
    let bots = BTreeMap::from([
        (String::from("bot1"), BotRuntimeStatus::running()),
        (String::from("bot2"), BotRuntimeStatus::running()),
    ]);
    ServerStatus::online(bots, true, Some(0.02), None)
}

/// AppState backed by a stub agent
pub fn create_test_app_state() -> (AppState, Arc<StubAgent>) {
    let agent = Arc::new(StubAgent::default());
    let coordinator = Coordinator::new(
        test_fleet(),
        agent.clone(),
        Arc::new(NullNotifier),
        test_settings(),
    );
    (AppState::new(Arc::new(coordinator)), agent)
}

/// Send a request through the router and decode the JSON response
pub async fn send(app: Router, method: &str, uri: &str, body: Option<&str>) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(body.map(|b| Body::from(b.to_string())).unwrap_or_else(Body::empty))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::String(
            String::from_utf8_lossy(&bytes).into_owned(),
        ))
    };

    (status, json)
}
