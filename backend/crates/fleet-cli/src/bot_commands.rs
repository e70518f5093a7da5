use clap::Subcommand;

#[derive(Subcommand)]
pub enum BotCommands {
    /// Start a bot
    Start {
        /// Server key
        server: String,
        /// Bot ID
        bot_id: String,
    },
    /// Stop a bot
    Stop {
        /// Server key
        server: String,
        /// Bot ID
        bot_id: String,
    },
    /// Stop a bot, wait for it to settle, then start it again
    Restart {
        /// Server key
        server: String,
        /// Bot ID
        bot_id: String,
    },
}
