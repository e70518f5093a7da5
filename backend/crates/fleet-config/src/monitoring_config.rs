use crate::{ConfigError, ConfigErrorResult};

use std::time::Duration;

use fleet_core::SwitchPolicy;
use serde::Deserialize;

// Monitoring constraints
pub const MIN_INTERVAL_SECS: u64 = 1;
pub const MAX_INTERVAL_SECS: u64 = 3600;
pub const DEFAULT_INTERVAL_SECS: u64 = 30;

pub const MIN_HEALTH_CHECK_TIMEOUT_SECS: u64 = 1;
pub const MAX_HEALTH_CHECK_TIMEOUT_SECS: u64 = 300;
pub const DEFAULT_HEALTH_CHECK_TIMEOUT_SECS: u64 = 10;

pub const MAX_ANNOUNCEMENT_DELAY_SECS: u64 = 3600;
pub const DEFAULT_ANNOUNCEMENT_DELAY_SECS: u64 = 60;

pub const MAX_RESTART_SETTLE_SECS: u64 = 60;
pub const DEFAULT_RESTART_SETTLE_SECS: u64 = 2;

pub const DEFAULT_AUTO_RESTART: bool = true;
pub const DEFAULT_START_ON_LAUNCH: bool = true;

/// Health polling and failover timing.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MonitoringConfig {
    /// Seconds between monitor ticks
    pub interval_secs: u64,
    /// Timeout applied to every agent call (health, start, stop)
    pub health_check_timeout_secs: u64,
    /// Wait between announcing a promotion and executing it
    pub announcement_delay_secs: u64,
    /// Pause between stop and start when restarting a bot
    pub restart_settle_secs: u64,
    /// Start not-running bots on the active server each tick
    pub auto_restart: bool,
    /// Begin monitoring as soon as the server starts
    pub start_on_launch: bool,
    pub switch_policy: SwitchPolicy,
}

impl Default for MonitoringConfig {
    fn default() -> Self {
        Self {
            interval_secs: DEFAULT_INTERVAL_SECS,
            health_check_timeout_secs: DEFAULT_HEALTH_CHECK_TIMEOUT_SECS,
            announcement_delay_secs: DEFAULT_ANNOUNCEMENT_DELAY_SECS,
            restart_settle_secs: DEFAULT_RESTART_SETTLE_SECS,
            auto_restart: DEFAULT_AUTO_RESTART,
            start_on_launch: DEFAULT_START_ON_LAUNCH,
            switch_policy: SwitchPolicy::default(),
        }
    }
}

impl MonitoringConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.interval_secs < MIN_INTERVAL_SECS || self.interval_secs > MAX_INTERVAL_SECS {
            return Err(ConfigError::monitoring(format!(
                "monitoring.interval_secs must be {}-{}, got {}",
                MIN_INTERVAL_SECS, MAX_INTERVAL_SECS, self.interval_secs
            )));
        }

        if self.health_check_timeout_secs < MIN_HEALTH_CHECK_TIMEOUT_SECS
            || self.health_check_timeout_secs > MAX_HEALTH_CHECK_TIMEOUT_SECS
        {
            return Err(ConfigError::monitoring(format!(
                "monitoring.health_check_timeout_secs must be {}-{}, got {}",
                MIN_HEALTH_CHECK_TIMEOUT_SECS,
                MAX_HEALTH_CHECK_TIMEOUT_SECS,
                self.health_check_timeout_secs
            )));
        }

        if self.announcement_delay_secs > MAX_ANNOUNCEMENT_DELAY_SECS {
            return Err(ConfigError::monitoring(format!(
                "monitoring.announcement_delay_secs must be 0-{}, got {}",
                MAX_ANNOUNCEMENT_DELAY_SECS, self.announcement_delay_secs
            )));
        }

        if self.restart_settle_secs > MAX_RESTART_SETTLE_SECS {
            return Err(ConfigError::monitoring(format!(
                "monitoring.restart_settle_secs must be 0-{}, got {}",
                MAX_RESTART_SETTLE_SECS, self.restart_settle_secs
            )));
        }

        Ok(())
    }

    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs)
    }

    pub fn health_check_timeout(&self) -> Duration {
        Duration::from_secs(self.health_check_timeout_secs)
    }

    pub fn announcement_delay(&self) -> Duration {
        Duration::from_secs(self.announcement_delay_secs)
    }

    pub fn restart_settle(&self) -> Duration {
        Duration::from_secs(self.restart_settle_secs)
    }
}
