//! MCP Server Entry Point
//!
//! Initializes logging, loads configuration, and serves the dictionary tool
//! over STDIO.

use anyhow::Result;
use tracing::{Level, error, info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use steingass_mcp_server::core::{Config, McpServer, StdioTransport};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration from environment
    let config = Config::from_env();

    // Initialize logging
    init_logging(&config.logging.level);

    info!("Starting {} v{}", config.server.name, config.server.version);

    let server = McpServer::new(config).inspect_err(|e| {
        error!("Failed to initialize server: {}", e);
    })?;

    if let Err(e) = StdioTransport::run(server).await {
        error!("Server error: {}", e);
        return Err(e.into());
    }

    info!("Server shutting down");

    Ok(())
}

/// Initialize the logging subsystem.
///
/// Logs go to stderr; stdout carries the protocol. `RUST_LOG` directives are
/// honoured on top of the configured level.
fn init_logging(level: &str) {
    let (level, fallback) = match level.parse::<Level>() {
        Ok(level) => (level, false),
        Err(_) => (Level::INFO, true),
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_ansi(false)
        .with_writer(std::io::stderr)
        .init();

    if fallback {
        warn!("Unknown log level, falling back to info");
    }
}
