pub mod bot_action;
pub mod bot_descriptor;
pub mod bot_outcome;
pub mod bot_runtime_status;
pub mod fleet;
pub mod health_state;
pub mod monitor_snapshot;
pub mod pending_promotion;
pub mod server_descriptor;
pub mod server_status;
pub mod switch_policy;
pub mod switch_report;
