pub mod agent_api;
pub mod bot_lifecycle;
pub mod candidate;
pub mod coordinator;
pub mod error;
pub mod failover_controller;
pub mod failover_decision;
pub mod failover_guard;
pub mod http_agent_client;
pub mod log_notifier;
pub mod metrics;
pub mod monitor_loop;
pub mod monitor_settings;
pub mod monitor_state;
pub mod notification_sink;
pub mod stop_guard;
pub mod stop_signal;
pub mod telegram_notifier;

pub use agent_api::AgentApi;
pub use bot_lifecycle::BotLifecycleManager;
pub use candidate::{select_candidate, transition_message};
pub use coordinator::Coordinator;
pub use error::{MonitorError, Result};
pub use failover_controller::FailoverController;
pub use failover_decision::FailoverDecision;
pub use failover_guard::FailoverGuard;
pub use http_agent_client::HttpAgentClient;
pub use log_notifier::LogNotifier;
pub use metrics::Metrics;
pub use monitor_loop::MonitorLoop;
pub use monitor_settings::MonitorSettings;
pub use monitor_state::MonitorState;
pub use notification_sink::{NotificationSink, notifier_from_config};
pub use stop_guard::StopGuard;
pub use stop_signal::StopSignal;
pub use telegram_notifier::TelegramNotifier;

#[cfg(test)]
mod tests;
