
use crate::{
    AgentApi, BotLifecycleManager, FailoverController, MonitorLoop, MonitorSettings, MonitorState,
    NotificationSink,
};

use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use async_trait::async_trait;
use fleet_core::{
    BotAction, BotDescriptor, BotRuntimeStatus, Fleet, ServerDescriptor, ServerStatus, SwitchPolicy,
};

/// Everything the fake agent and notifier observe, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Event {
    Health(String),
    Start(String, String),
    Stop(String, String),
    Notify(String),
}

#[derive(Clone, Default)]
pub(crate) struct Journal {
    entries: Arc<Mutex<Vec<(Event, Instant)>>>,
}

impl Journal {
    fn push(&self, event: Event) {
        self.entries.lock().unwrap().push((event, Instant::now()));
    }

    pub(crate) fn events(&self) -> Vec<Event> {
        self.entries.lock().unwrap().iter().map(|(e, _)| e.clone()).collect()
    }

    pub(crate) fn timed(&self) -> Vec<(Event, Instant)> {
        self.entries.lock().unwrap().clone()
    }

    /// Everything except health polls
    pub(crate) fn commands(&self) -> Vec<Event> {
        self.events()
            .into_iter()
            .filter(|e| !matches!(e, Event::Health(_)))
            .collect()
    }

    pub(crate) fn health_polls(&self, key: &str) -> usize {
        self.events()
            .iter()
            .filter(|e| matches!(e, Event::Health(k) if k == key))
            .count()
    }

    pub(crate) fn notifications(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                Event::Notify(text) => Some(text),
                _ => None,
            })
            .collect()
    }

    pub(crate) fn clear(&self) {
        self.entries.lock().unwrap().clear();
    }
}

/// In-memory agent: health comes from a table, commands succeed unless
/// listed as failing.
pub(crate) struct FakeAgent {
    journal: Journal,
    health: Mutex<HashMap<String, ServerStatus>>,
    failing: Mutex<HashSet<(String, String, BotAction)>>,
    slow_starts: Mutex<HashMap<String, Duration>>,
    panic_on_health: AtomicBool,
}

impl FakeAgent {
    pub(crate) fn new(journal: Journal) -> Self {
        Self {
            journal,
            health: Mutex::new(HashMap::new()),
            failing: Mutex::new(HashSet::new()),
            slow_starts: Mutex::new(HashMap::new()),
            panic_on_health: AtomicBool::new(false),
        }
    }

    pub(crate) fn set_health(&self, key: &str, status: ServerStatus) {
        self.health.lock().unwrap().insert(key.to_string(), status);
    }

    pub(crate) fn fail(&self, server: &str, bot_id: &str, action: BotAction) {
        self.failing
            .lock()
            .unwrap()
            .insert((server.to_string(), bot_id.to_string(), action));
    }

    /// Every start on `server` takes `delay` before it is acknowledged
    pub(crate) fn slow_starts(&self, server: &str, delay: Duration) {
        self.slow_starts
            .lock()
            .unwrap()
            .insert(server.to_string(), delay);
    }

    pub(crate) fn panic_on_health(&self, enabled: bool) {
        self.panic_on_health.store(enabled, Ordering::SeqCst);
    }

    fn command(&self, server: &ServerDescriptor, bot_id: &str, action: BotAction) -> bool {
        let event = match action {
            BotAction::Start => Event::Start(server.key.clone(), bot_id.to_string()),
            BotAction::Stop => Event::Stop(server.key.clone(), bot_id.to_string()),
        };
        self.journal.push(event);
        !self
            .failing
            .lock()
            .unwrap()
            .contains(&(server.key.clone(), bot_id.to_string(), action))
    }
}

#[async_trait]
impl AgentApi for FakeAgent {
    async fn check_health(&self, server: &ServerDescriptor) -> ServerStatus {
        self.journal.push(Event::Health(server.key.clone()));
        if self.panic_on_health.load(Ordering::SeqCst) {
            panic!("agent exploded");
        }
        self.health
            .lock()
            .unwrap()
            .get(&server.key)
            .cloned()
            .unwrap_or_else(|| ServerStatus::offline("connection refused"))
    }

    async fn start_bot(&self, server: &ServerDescriptor, bot_id: &str, _bot: &BotDescriptor) -> bool {
        let delay = self.slow_starts.lock().unwrap().get(&server.key).copied();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        self.command(server, bot_id, BotAction::Start)
    }

    async fn stop_bot(&self, server: &ServerDescriptor, bot_id: &str, _bot: &BotDescriptor) -> bool {
        self.command(server, bot_id, BotAction::Stop)
    }
}

pub(crate) struct RecordingNotifier {
    journal: Journal,
}

#[async_trait]
impl NotificationSink for RecordingNotifier {
    fn name(&self) -> &str {
        "recording"
    }

    async fn send(&self, text: &str) {
        self.journal.push(Event::Notify(text.to_string()));
    }
}

/// Fleet of `count` servers (server1 primary), each with bot1 and bot2.
pub(crate) fn fleet(count: u32) -> Fleet {
    let servers = (1..=count)
        .map(|n| {
            let bots = ["bot1", "bot2"]
                .into_iter()
                .map(|id| {
                    (
                        id.to_string(),
                        BotDescriptor::new(
                            format!("Bot {id}"),
                            format!("python {id}.py"),
                            format!("pkill -f {id}.py"),
                            format!("{id}.py"),
                        ),
                    )
                })
                .collect();
            ServerDescriptor {
                key: format!("server{n}"),
                id: n,
                name: format!("Server {n}"),
                agent_url: format!("http://server{n}:500{n}"),
                root_path: String::new(),
                is_primary: n == 1,
                bots,
            }
        })
        .collect();
    Fleet::new(servers).unwrap()
}

/// Online with every bot running
pub(crate) fn healthy() -> ServerStatus {
    let bots = BTreeMap::from([
        (String::from("bot1"), BotRuntimeStatus::running()),
        (String::from("bot2"), BotRuntimeStatus::running()),
    ]);
    ServerStatus::online(bots, true, Some(0.01), None)
}

/// Online, with the listed bots reported not running
pub(crate) fn degraded(stopped: &[&str]) -> ServerStatus {
    let bots = ["bot1", "bot2"]
        .into_iter()
        .map(|id| {
            let status = if stopped.contains(&id) {
                BotRuntimeStatus::stopped()
            } else {
                BotRuntimeStatus::running()
            };
            (id.to_string(), status)
        })
        .collect();
    ServerStatus::online(bots, false, Some(0.01), None)
}

pub(crate) fn settings(announcement_delay: Duration) -> MonitorSettings {
    MonitorSettings {
        interval: Duration::from_millis(20),
        announcement_delay,
        restart_settle: Duration::ZERO,
        auto_restart: true,
        switch_policy: SwitchPolicy::Unconditional,
    }
}

/// All monitor components wired to a fake agent and recording notifier.
pub(crate) struct Harness {
    pub(crate) journal: Journal,
    pub(crate) agent: Arc<FakeAgent>,
    pub(crate) state: MonitorState,
    pub(crate) lifecycle: BotLifecycleManager,
    pub(crate) controller: FailoverController,
    pub(crate) monitor: MonitorLoop,
}

impl Harness {
    pub(crate) fn new(servers: u32, settings: MonitorSettings) -> Self {
        let journal = Journal::default();
        let fleet = Arc::new(fleet(servers));
        let agent = Arc::new(FakeAgent::new(journal.clone()));
        let notifier = Arc::new(RecordingNotifier {
            journal: journal.clone(),
        });
        let state = MonitorState::new(settings.auto_restart);
        let lifecycle = BotLifecycleManager::new(
            Arc::clone(&fleet),
            agent.clone(),
            settings.restart_settle,
        );
        let controller = FailoverController::new(
            Arc::clone(&fleet),
            state.clone(),
            lifecycle.clone(),
            notifier,
            &settings,
        );
        let monitor = MonitorLoop::new(
            fleet,
            agent.clone(),
            state.clone(),
            controller.clone(),
            lifecycle.clone(),
            settings.interval,
        );

        Self {
            journal,
            agent,
            state,
            lifecycle,
            controller,
            monitor,
        }
    }

    /// Poll and commit statuses without evaluating failover
    pub(crate) async fn record(&self, statuses: &[(&str, ServerStatus)]) {
        self.state
            .record_statuses(
                statuses
                    .iter()
                    .map(|(key, status)| (key.to_string(), status.clone())),
            )
            .await;
    }
}
