use fleet_config::Config;
use fleet_monitor::{Coordinator, StopSignal};
use fleet_server::{AppState, build_router, logger, prometheus};

use std::error::Error;
use std::sync::Arc;

use log::{error, info, warn};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenvy::dotenv().ok();

    // Load and validate configuration
    let config = Config::load()?;
    config.validate()?;

    // Initialize logger (before any other logging)
    logger::initialize(&config.logging, &Config::config_dir()?)?;

    info!("Starting fleet-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let metrics = match prometheus::install_recorder() {
        Ok(handle) => Some(handle),
        Err(e) => {
            warn!("{e}; /metrics disabled");
            None
        }
    };

    let coordinator = Arc::new(Coordinator::from_config(&config)?);

    if config.monitoring.start_on_launch {
        coordinator.start_monitoring().await;
    } else {
        info!("Monitoring not started (start_on_launch = false)");
    }

    let app_state = AppState {
        coordinator: Arc::clone(&coordinator),
        metrics,
        cors_origins: config.server.cors_origins.clone(),
    };
    let app = build_router(app_state);

    let listener = TcpListener::bind(config.bind_addr()).await?;
    info!("Server listening on {}", listener.local_addr()?);

    // Spawn signal handler for graceful shutdown
    let shutdown = StopSignal::new();
    let shutdown_for_signal = shutdown.clone();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                info!("Received SIGINT (Ctrl+C), initiating graceful shutdown");
                shutdown_for_signal.trigger();
            }
            Err(e) => {
                error!("Failed to listen for SIGINT: {}", e);
            }
        }
    });

    let mut shutdown_guard = shutdown.guard();
    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            shutdown_guard.wait().await;
        })
        .await?;

    coordinator.stop_monitoring().await;
    info!("Graceful shutdown complete");

    Ok(())
}
