//! FlixHQ gateway binary
//!
//! Starts the HTTP gateway.
//!
//! # Usage
//!
//! ```bash
//! flixhq-gateway --port 3000 --host 0.0.0.0
//! ```
//!
//! # API Endpoints
//!
//! - `GET /movies/flixhq`: Provider descriptor
//! - `GET /movies/flixhq/:movie?page=`: Catalog search
//! - `GET /movies/flixhq/info?id=`: Media info
//! - `GET /movies/flixhq/watch/:episodeId?mediaId=&server=`: Episode sources

use clap::Parser;
use flixhq_gateway::cli::{ServerArgs, run_server_mode};
use std::path::PathBuf;

/// REST gateway for the FlixHQ provider
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Port to listen on
    #[arg(short, long)]
    port: Option<u16>,

    /// Host to bind to (defaults to ::)
    #[arg(long)]
    host: Option<String>,

    /// Configuration file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    run_server_mode(ServerArgs {
        port: cli.port,
        host: cli.host,
        config: cli.config,
        verbose: cli.verbose,
    })
    .await
}
