use std::net::IpAddr;
use std::sync::Arc;

use anyhow::Context;
use chrono::Utc;
use tokio::signal;
use tracing::{error, info, warn};

use backlog_server::{
    catalog::Catalog, config::Config, create_routes, steam_import::SteamImporter,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    info!("Starting backlog server...");

    let config = Config::from_env().context("failed to read configuration")?;
    let host: IpAddr = config
        .host
        .parse()
        .with_context(|| format!("invalid HOST: {}", config.host))?;

    let catalog = Catalog::mock(Utc::now().date_naive());
    info!(
        "Loaded mock catalog: {} games, {} sessions, {} wishlist items",
        catalog.games.len(),
        catalog.sessions.len(),
        catalog.wishlist.len()
    );

    let steam_importer =
        SteamImporter::new(catalog.steam_library.clone(), config.steam_fetch_delay);
    let port = config.port;

    let routes = create_routes(
        Arc::new(catalog),
        Arc::new(steam_importer),
        Arc::new(config),
    );

    let (addr, server) = warp::serve(routes)
        .bind_with_graceful_shutdown((host, port), shutdown_signal());

    info!(
        "Server started successfully on {}. Press Ctrl+C to stop.",
        addr
    );
    server.await;
    info!("Server shutdown complete.");
    Ok(())
}

/// Resolves on SIGINT or SIGTERM (Ctrl+C off unix).
async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use signal::unix::{SignalKind, signal};

        match (
            signal(SignalKind::interrupt()),
            signal(SignalKind::terminate()),
        ) {
            (Ok(mut sigint), Ok(mut sigterm)) => {
                tokio::select! {
                    _ = sigint.recv() => {
                        info!("Received SIGINT, shutting down gracefully...");
                    }
                    _ = sigterm.recv() => {
                        info!("Received SIGTERM, shutting down gracefully...");
                    }
                }
                return;
            }
            (Err(err), _) | (_, Err(err)) => {
                warn!("Failed to install signal handlers, using ctrl+c: {}", err);
            }
        }
    }

    match signal::ctrl_c().await {
        Ok(()) => info!("Received Ctrl+C, shutting down gracefully..."),
        Err(err) => {
            error!("Failed to listen for ctrl+c: {}", err);
            std::future::pending::<()>().await;
        }
    }
}
