//! fleet - operator CLI for the bot fleet failover coordinator
//!
//! # Examples
//!
//! ```bash
//! # Show health of every server
//! fleet status --pretty
//!
//! # Move all bots to the backup
//! fleet switch server2
//!
//! # Restart one bot
//! fleet bot restart server1 bot3
//! ```

use fleet_cli::{BotCommands, Cli, Client, Commands, MonitoringCommands};

use std::process::ExitCode;

use clap::Parser;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let client = Client::new(&cli.server);

    let result = match cli.command {
        Commands::Status => client.status().await,
        Commands::Servers => client.list_servers().await,
        Commands::Bots => client.list_bots().await,

        Commands::Monitoring { action } => match action {
            MonitoringCommands::Start => client.start_monitoring().await,
            MonitoringCommands::Stop => client.stop_monitoring().await,
        },

        Commands::Switch { server } => client.switch_server(&server).await,

        Commands::Bot { action } => match action {
            BotCommands::Start { server, bot_id } => client.start_bot(&server, &bot_id).await,
            BotCommands::Stop { server, bot_id } => client.stop_bot(&server, &bot_id).await,
            BotCommands::Restart { server, bot_id } => {
                client.restart_bot(&server, &bot_id).await
            }
        },

        Commands::AutoRestart { state } => client.set_auto_restart(state.enabled()).await,
    };

    match result {
        Ok(value) => {
            let output = if cli.pretty {
                serde_json::to_string_pretty(&value)
            } else {
                serde_json::to_string(&value)
            };

            match output {
                Ok(json) => {
                    println!("{}", json);
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Error serializing response: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
