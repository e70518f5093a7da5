use fleet_core::{BotAction, HealthState};
use metrics::{counter, gauge, histogram};

/// Metrics collector for monitoring and failover
#[derive(Clone)]
pub struct Metrics {
    prefix: &'static str,
}

impl Metrics {
    pub fn new() -> Self {
        Self { prefix: "fleet" }
    }

    /// Record one health poll result
    pub fn health_checked(&self, state: HealthState) {
        counter!(format!("{}.health_checks.total", self.prefix)).increment(1);
        counter!(format!("{}.health_checks.{}", self.prefix, state.as_str())).increment(1);
    }

    /// Record a failover lifecycle event (scheduled, completed, aborted, cancelled)
    pub fn failover_event(&self, event: &str) {
        counter!(format!("{}.failover.{}", self.prefix, event)).increment(1);
    }

    /// Record a start/stop command sent to an agent
    pub fn bot_command(&self, action: BotAction, success: bool) {
        let result = if success { "success" } else { "failure" };
        counter!(format!("{}.bot_commands.total", self.prefix)).increment(1);
        counter!(format!(
            "{}.bot_commands.{}.{}",
            self.prefix,
            action.as_str(),
            result
        ))
        .increment(1);
    }

    /// Record a monitor iteration that panicked or failed
    pub fn loop_fault(&self) {
        counter!(format!("{}.monitor.faults", self.prefix)).increment(1);
    }

    /// Record monitor iteration latency
    pub fn tick_completed(&self, duration: std::time::Duration) {
        counter!(format!("{}.monitor.ticks", self.prefix)).increment(1);
        histogram!(format!("{}.monitor.tick_ms", self.prefix)).record(duration.as_millis() as f64);
    }

    /// Record whether the monitor loop is running
    pub fn monitoring_active(&self, active: bool) {
        gauge!(format!("{}.monitor.active", self.prefix)).set(if active { 1.0 } else { 0.0 });
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}
