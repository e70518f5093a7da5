use clap::Subcommand;

#[derive(Subcommand)]
pub enum MonitoringCommands {
    /// Start the monitor loop
    Start,
    /// Stop the monitor loop and cancel any pending promotion
    Stop,
}
