use ua_server::{build_router, error::ServerError, logger};

use std::error::Error;
use std::path::Path;

use log::{error, info, warn};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Load and validate configuration
    let config = ua_config::Config::load()?;
    config.validate()?;

    // Construct log file path if configured
    let log_file_path = if let Some(ref filename) = config.logging.file {
        let log_dir = ua_config::Config::config_dir()?.join(&config.logging.dir);
        std::fs::create_dir_all(&log_dir)?;
        Some(log_dir.join(filename))
    } else {
        None
    };

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting ua-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    if !Path::new(&config.server.static_dir).is_dir() {
        warn!(
            "Bundle directory {} does not exist; every route will 404",
            config.server.static_dir
        );
    } else if !config.server.index_path().is_file() {
        warn!(
            "Entry page {} not found; unmatched routes will 404",
            config.server.index_path().display()
        );
    }

    let app = build_router(&config.server);

    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr)
        .await
        .map_err(|source| ServerError::Bind {
            addr: bind_addr.clone(),
            source,
        })?;

    // Get actual bound address (important when port is 0 / auto-assigned)
    let actual_addr = listener.local_addr()?;
    info!("Server listening on {}", actual_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received SIGINT (Ctrl+C), shutting down"),
        Err(e) => {
            error!("Failed to listen for SIGINT: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
