mod config;
mod default_fleet;
mod error;
mod log_level;
mod logging_config;
mod monitoring_config;
mod notification_config;
mod server_config;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use default_fleet::default_servers;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use monitoring_config::MonitoringConfig;
pub use notification_config::NotificationConfig;
pub use server_config::ServerConfig;

const CONFIG_DIR_ENV: &str = "FLEET_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = ".fleet";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 5000;
const MIN_PORT: u16 = 1024;
const DEFAULT_CORS_ORIGIN: &str = "*";

const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";

const DEFAULT_TELEGRAM_API_BASE: &str = "https://api.telegram.org";
