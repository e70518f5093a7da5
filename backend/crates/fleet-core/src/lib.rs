pub mod error;
pub mod models;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result as CoreResult};
pub use models::bot_action::BotAction;
pub use models::bot_descriptor::BotDescriptor;
pub use models::bot_outcome::BotOutcome;
pub use models::bot_runtime_status::BotRuntimeStatus;
pub use models::fleet::Fleet;
pub use models::health_state::HealthState;
pub use models::monitor_snapshot::MonitorSnapshot;
pub use models::pending_promotion::PendingPromotion;
pub use models::server_descriptor::ServerDescriptor;
pub use models::server_status::ServerStatus;
pub use models::switch_policy::SwitchPolicy;
pub use models::switch_report::SwitchReport;
