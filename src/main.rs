//! Edge gateway binary.
//!
//! Startup order: parse CLI args, load and validate configuration, bring up
//! tracing, optionally start the metrics exporter, bind the listener, serve
//! until a shutdown signal arrives.

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use edge_gateway::config::loader;
use edge_gateway::lifecycle::Shutdown;
use edge_gateway::observability;
use edge_gateway::HttpServer;

#[derive(Parser)]
#[command(name = "edge-gateway")]
#[command(about = "Edge gateway for the recruitment dashboard", long_about = None)]
struct Args {
    /// Path to the TOML configuration file. Defaults are used if it does not exist.
    #[arg(short, long, default_value = "gateway.toml")]
    config: PathBuf,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Configuration is loaded before tracing so the log level can come from
    // the file; load errors surface through main's error return.
    let config = loader::load_or_default(&args.config)?;

    observability::logging::init(&config.observability.log_level);

    tracing::info!("edge-gateway v0.1.0 starting");
    tracing::info!(
        bind_address = %config.listener.bind_address,
        upstream_origin = %config.upstream.origin,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );
    // Logical paths are relayed verbatim. There is no route allowlist, so
    // the upstream origin is the trust boundary.
    tracing::info!(
        origin = %config.upstream.origin,
        "Forwarding logical paths to upstream without an allowlist"
    );

    if config.observability.metrics_enabled {
        if let Ok(addr) = config.observability.metrics_address.parse() {
            observability::metrics::init_metrics(addr);
        } else {
            tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            );
        }
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config);
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
