use bb_hub::{BroadcastConfig, BroadcastHub};
use bb_server::{AppState, build_router, logger};

use std::error::Error;

use log::{error, info};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Load and validate configuration
    let config = bb_config::Config::load()?;
    config.validate()?;

    let log_file_path = config.log_file_path()?;
    if let Some(ref path) = log_file_path
        && let Some(dir) = path.parent()
    {
        std::fs::create_dir_all(dir)?;
    }

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting bb-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let hub: BroadcastHub = BroadcastHub::new(BroadcastConfig::from(&config.hub))?;

    let app = build_router(AppState::new(hub.clone()));

    let listener = TcpListener::bind(config.bind_addr()).await?;
    info!("Server listening on {}", listener.local_addr()?);

    // Ctrl+C tears the hub down, which in turn stops the server
    let hub_for_signal = hub.clone();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                info!("Received SIGINT (Ctrl+C), initiating graceful shutdown");
                hub_for_signal.shutdown();
            }
            Err(e) => {
                error!("Failed to listen for SIGINT: {}", e);
            }
        }
    });

    let mut shutdown = hub.shutdown_guard();
    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            shutdown.wait().await;
        })
        .await?;

    hub.shutdown();
    hub.wait_for_relay().await;
    info!("Graceful shutdown complete");

    Ok(())
}
