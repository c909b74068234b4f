use wks_server::error::ServerError;
use wks_server::{build_router, logger, metrics_router};

use wks_auth::JwtValidator;
use wks_config::Config;
use wks_realtime::{AppState, ConnectionConfig, ShutdownCoordinator};

use std::error::Error;
use std::path::PathBuf;
use std::sync::Arc;

use log::{error, info, warn};
use metrics_exporter_prometheus::PrometheusBuilder;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // A missing .env is fine
    dotenvy::dotenv().ok();

    // Load and validate configuration
    let config = Config::load()?;
    config.validate()?;

    let log_file_path: Option<PathBuf> = match config.logging.file {
        Some(ref filename) => {
            let log_dir = Config::config_dir()?;
            std::fs::create_dir_all(&log_dir)?;
            Some(log_dir.join(filename))
        }
        None => None,
    };

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting wks-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let metrics_handle = PrometheusBuilder::new()
        .install_recorder()
        .map_err(|e| ServerError::Metrics {
            message: e.to_string(),
        })?;

    // Database pool, migrations included
    let database_path = config.database_path()?;
    let pool = wks_db::connect(&database_path)
        .await
        .map_err(ServerError::from)?;
    info!("Migrations complete");

    let jwt_validator: Option<Arc<JwtValidator>> = match config.auth.jwt_secret {
        Some(ref secret) if config.auth.enabled => {
            info!("JWT: HS256 authentication enabled");
            Some(Arc::new(JwtValidator::with_hs256(secret.as_bytes())))
        }
        _ => {
            warn!("Authentication DISABLED - handshake tokens are plain user ids");
            None
        }
    };

    let shutdown = ShutdownCoordinator::new();

    let app_state = AppState::new(
        pool,
        jwt_validator,
        ConnectionConfig::from(&config),
        config.activity.clone(),
        shutdown.clone(),
    );

    let app = build_router(app_state).merge(metrics_router(metrics_handle));

    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr).await?;
    info!("Server listening on {}", listener.local_addr()?);

    // Spawn signal handler for graceful shutdown
    let shutdown_for_signal = shutdown.clone();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                info!("Received SIGINT (Ctrl+C), initiating graceful shutdown");
                shutdown_for_signal.shutdown();
            }
            Err(e) => {
                error!("Failed to listen for SIGINT: {}", e);
            }
        }
    });

    info!("Server ready to accept connections");
    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            shutdown.subscribe_guard().wait().await;
            info!("Graceful shutdown complete");
        })
        .await?;

    Ok(())
}
