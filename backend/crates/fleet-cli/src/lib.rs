//! fleet-cli library
//!
//! Exports the argument parser and the HTTP client for the coordinator's
//! control surface so both can be exercised from tests.

pub mod bot_commands;
pub mod cli;
pub mod client;
pub mod commands;
pub mod monitoring_commands;

#[cfg(test)]
mod tests;

pub use bot_commands::BotCommands;
pub use cli::{Cli, DEFAULT_SERVER_URL};
pub use client::{CliClientResult, Client, ClientError};
pub use commands::{Commands, Toggle};
pub use monitoring_commands::MonitoringCommands;
