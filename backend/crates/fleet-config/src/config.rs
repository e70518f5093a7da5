use crate::{
    CONFIG_DIR_ENV, CONFIG_FILENAME, ConfigError, ConfigErrorResult, DEFAULT_CONFIG_DIR,
    LoggingConfig, MonitoringConfig, NotificationConfig, ServerConfig, default_servers,
};

use std::path::{Path, PathBuf};

use fleet_core::{Fleet, ServerDescriptor};
use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub monitoring: MonitoringConfig,
    pub notification: NotificationConfig,
    pub logging: LoggingConfig,
    pub servers: Vec<ServerDescriptor>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            monitoring: MonitoringConfig::default(),
            notification: NotificationConfig::default(),
            logging: LoggingConfig::default(),
            servers: default_servers(),
        }
    }
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for FLEET_CONFIG_DIR env var, else use ./.fleet/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply FLEET_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    /// Parse a TOML document into a config (no env overrides).
    /// A document without `[[servers]]` keeps the default fleet.
    pub fn from_toml_str(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::from_toml_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: FLEET_CONFIG_DIR env var > ./.fleet/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.monitoring.validate()?;
        self.notification.validate()?;
        self.fleet()?;

        Ok(())
    }

    /// Build the validated fleet from the `[[servers]]` entries.
    pub fn fleet(&self) -> ConfigErrorResult<Fleet> {
        Ok(Fleet::new(self.servers.clone())?)
    }

    /// Get bind address as string.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!(
            "  server: {}:{} (cors: {})",
            self.server.host,
            self.server.port,
            self.server.cors_origins.join(",")
        );

        info!(
            "  monitoring: interval={}s, timeout={}s, announce={}s, settle={}s",
            self.monitoring.interval_secs,
            self.monitoring.health_check_timeout_secs,
            self.monitoring.announcement_delay_secs,
            self.monitoring.restart_settle_secs
        );

        info!(
            "  failover: policy={}, auto_restart={}, start_on_launch={}",
            self.monitoring.switch_policy.as_str(),
            self.monitoring.auto_restart,
            self.monitoring.start_on_launch
        );

        info!(
            "  notification: {}",
            if self.notification.telegram_credentials().is_some() {
                "telegram"
            } else {
                "log only"
            }
        );

        info!(
            "  logging: {} (colored: {})",
            *self.logging.level, self.logging.colored
        );

        for server in &self.servers {
            info!(
                "  server {} (id={}{}): {} -> {} [{} bots]",
                server.key,
                server.id,
                if server.is_primary { ", primary" } else { "" },
                server.name,
                server.agent_url,
                server.bots.len()
            );
        }
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("FLEET_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("FLEET_SERVER_PORT", &mut self.server.port);
        Self::apply_env_list("FLEET_CORS_ORIGINS", &mut self.server.cors_origins);

        // Monitoring
        Self::apply_env_parse(
            "FLEET_MONITORING_INTERVAL",
            &mut self.monitoring.interval_secs,
        );
        Self::apply_env_parse(
            "FLEET_HEALTH_CHECK_TIMEOUT",
            &mut self.monitoring.health_check_timeout_secs,
        );
        Self::apply_env_parse(
            "FLEET_ANNOUNCEMENT_DELAY_SECS",
            &mut self.monitoring.announcement_delay_secs,
        );
        Self::apply_env_parse(
            "FLEET_RESTART_SETTLE_SECS",
            &mut self.monitoring.restart_settle_secs,
        );
        Self::apply_env_bool("FLEET_AUTO_RESTART", &mut self.monitoring.auto_restart);
        Self::apply_env_bool(
            "FLEET_START_ON_LAUNCH",
            &mut self.monitoring.start_on_launch,
        );
        Self::apply_env_parse("FLEET_SWITCH_POLICY", &mut self.monitoring.switch_policy);

        // Notification
        Self::apply_env_option_string(
            "FLEET_TELEGRAM_BOT_TOKEN",
            &mut self.notification.telegram_bot_token,
        );
        Self::apply_env_option_string(
            "FLEET_TELEGRAM_CHAT_ID",
            &mut self.notification.telegram_chat_id,
        );

        // Logging
        Self::apply_env_parse("FLEET_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("FLEET_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("FLEET_LOG_FILE", &mut self.logging.file);

        // Per-server agent URLs, e.g. FLEET_SERVER1_AGENT_URL
        for server in &mut self.servers {
            let var_name = format!("FLEET_{}_AGENT_URL", Self::env_key(&server.key));
            if let Ok(val) = std::env::var(&var_name) {
                server.agent_url = val;
            }
        }
    }

    /// Uppercase a server key and replace anything that isn't alphanumeric.
    fn env_key(key: &str) -> String {
        key.chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() {
                    c.to_ascii_uppercase()
                } else {
                    '_'
                }
            })
            .collect()
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }

    /// Helper: Apply environment variable override for comma-separated lists
    fn apply_env_list(var_name: &str, target: &mut Vec<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect();
        }
    }
}
