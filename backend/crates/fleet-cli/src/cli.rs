use crate::commands::Commands;

use clap::Parser;

pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:5000";

#[derive(Parser)]
#[command(name = "fleet")]
#[command(about = "Operator CLI for the bot fleet failover coordinator")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Coordinator URL
    #[arg(long, global = true, env = "FLEET_SERVER_URL", default_value = DEFAULT_SERVER_URL)]
    pub server: String,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,
}
