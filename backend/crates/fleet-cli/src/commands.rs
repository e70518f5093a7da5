use crate::{bot_commands::BotCommands, monitoring_commands::MonitoringCommands};

use clap::{Subcommand, ValueEnum};

#[derive(Subcommand)]
pub enum Commands {
    /// Show health, active server and pending promotion
    Status,

    /// List configured servers
    Servers,

    /// List bots per server
    Bots,

    /// Start or stop the monitor loop
    Monitoring {
        #[command(subcommand)]
        action: MonitoringCommands,
    },

    /// Switch immediately to a server
    Switch {
        /// Server key, e.g. server2
        server: String,
    },

    /// Bot operations on one server
    Bot {
        #[command(subcommand)]
        action: BotCommands,
    },

    /// Enable or disable automatic restart of stopped bots
    AutoRestart {
        #[arg(value_enum)]
        state: Toggle,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Toggle {
    On,
    Off,
}

impl Toggle {
    pub fn enabled(self) -> bool {
        self == Toggle::On
    }
}
