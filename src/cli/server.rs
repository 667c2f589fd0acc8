//! Server mode CLI logic
//!
//! Contains the core logic for running the HTTP gateway.

use crate::{config::ConfigLoader, server::app, utils::{logging, version}};
use anyhow::Result;
use std::path::PathBuf;

/// Arguments for server mode
#[derive(Debug, Default)]
pub struct ServerArgs {
    /// Port override
    pub port: Option<u16>,
    /// Host override
    pub host: Option<String>,
    /// Configuration file
    pub config: Option<PathBuf>,
    /// Log at debug level
    pub verbose: bool,
}

/// Run server mode with the given arguments
pub async fn run_server_mode(args: ServerArgs) -> Result<()> {
    // The global subscriber depends on the loaded settings, so loading logs
    // through a scoped one.
    let mut settings = tracing::subscriber::with_default(
        logging::bootstrap_subscriber(args.verbose),
        || ConfigLoader::new().load(args.config.as_deref()),
    )?;

    // CLI arguments take precedence over file and environment
    if let Some(host) = args.host {
        settings.server.host = host;
    }
    if let Some(port) = args.port {
        settings.server.port = port;
    }
    if args.verbose {
        settings.logging.verbose = true;
    }

    logging::init(&settings);

    tracing::info!("Starting FlixHQ gateway v{}", version::get_version());

    let app = app::create_app(&settings)?;

    let addr = parse_and_bind_address(&settings.server.host, settings.server.port).await?;

    tracing::info!(
        "FlixHQ gateway v{} listening on {} (mounted at {:?})",
        version::get_version(),
        addr,
        settings.server.mount_path
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("FlixHQ gateway stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}

/// Parse host string and attempt to bind to the address
///
/// - First try to bind to IPv6 (::)
/// - If that fails, fall back to IPv4 (0.0.0.0)
pub async fn parse_and_bind_address(host: &str, port: u16) -> Result<std::net::SocketAddr> {
    use std::net::{IpAddr, Ipv4Addr, SocketAddr};

    match host.parse::<IpAddr>() {
        Ok(IpAddr::V6(ip)) if ip.is_unspecified() => {
            let addr = SocketAddr::new(IpAddr::V6(ip), port);
            tracing::debug!("Using IPv6 any address: {}", addr);

            // Probe IPv6 support before committing to it
            match tokio::net::TcpListener::bind(addr).await {
                Ok(_) => Ok(addr),
                Err(e) => {
                    tracing::warn!(
                        "Could not listen on [::]:{} (Caused by {}), falling back to 0.0.0.0",
                        port,
                        e
                    );
                    Ok(SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), port))
                }
            }
        }
        Ok(ip) => {
            let addr = SocketAddr::new(ip, port);
            tracing::debug!("Parsed address: {}", addr);
            Ok(addr)
        }
        Err(_) => anyhow::bail!(
            "Invalid host address: {}. Use an IP address, '::' for IPv6 or '0.0.0.0' for IPv4",
            host
        ),
    }
}
