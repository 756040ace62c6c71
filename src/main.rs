use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::{info, Level};

use oldfilms::{config::Config, server};

#[derive(Parser)]
#[command(
    name = "oldfilms",
    version,
    about = "Decade-look video filters served over HTTP",
    long_about = "Oldfilms runs a local web server that applies 1900s-1990s looks to uploaded videos by driving FFmpeg with hand-tuned filter chains. Open the printed URL in a browser, or from another device on the same network."
)]
struct Cli {
    /// Address to bind to (default 0.0.0.0, reachable from the local network)
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on (default 5000)
    #[arg(short, long)]
    port: Option<u16>,

    /// Configuration file (optional)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[actix_web::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt().with_max_level(log_level).init();

    info!("Starting oldfilms v{}", env!("CARGO_PKG_VERSION"));

    // Load configuration
    let mut config = match cli.config {
        Some(config_path) => {
            info!("Loading configuration from {:?}", config_path);
            Config::from_file(&config_path)?
        }
        None => {
            info!("Using default configuration");
            Config::default()
        }
    };

    if let Some(host) = cli.host {
        config.server.host = host;
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }
    config.validate()?;

    server::run(config).await?;

    info!("Server stopped");
    Ok(())
}
