use std::time::Duration;

use fleet_config::MonitoringConfig;
use fleet_core::SwitchPolicy;

/// Runtime timing and policy for the monitor, resolved from configuration.
///
/// Kept separate from [`MonitoringConfig`] so timings can be expressed in
/// sub-second units.
#[derive(Debug, Clone)]
pub struct MonitorSettings {
    pub interval: Duration,
    pub announcement_delay: Duration,
    pub restart_settle: Duration,
    pub auto_restart: bool,
    pub switch_policy: SwitchPolicy,
}

impl Default for MonitorSettings {
    fn default() -> Self {
        Self::from(&MonitoringConfig::default())
    }
}

impl From<&MonitoringConfig> for MonitorSettings {
    fn from(config: &MonitoringConfig) -> Self {
        Self {
            interval: config.interval(),
            announcement_delay: config.announcement_delay(),
            restart_settle: config.restart_settle(),
            auto_restart: config.auto_restart,
            switch_policy: config.switch_policy,
        }
    }
}
