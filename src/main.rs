//! Redirect server.
//!
//! Serves the host application with the redirections plugin applied.
//!
//! ```text
//!   config.toml ──▶ loader ──▶ startup ──▶ HostApp ──▶ HttpServer ──▶ clients
//!                                 │
//!                                 └── plugins (redirections → 301 routes)
//! ```

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use redirect_plugin::lifecycle::{prepare, signals, Prepared, Shutdown};
use redirect_plugin::observability::metrics;
use redirect_plugin::HttpServer;

#[derive(Parser)]
#[command(name = "redirect-server")]
#[command(about = "Serve permanent redirects from a config file", long_about = None)]
struct Cli {
    /// Path to the TOML config file.
    #[arg(short, long, default_value = "redirections.toml")]
    config: PathBuf,

    /// Validate config and plugin installation, then exit.
    #[arg(long)]
    check: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let Prepared { config, host } = match prepare(&cli.config) {
        Ok(prepared) => prepared,
        Err(e) => {
            tracing::error!(error = %e, "Startup failed");
            return Err(e.into());
        }
    };

    for route in host.routes() {
        tracing::debug!(path = %route.path, label = %route.label, "Route registered");
    }

    if cli.check {
        tracing::info!("Configuration OK");
        return Ok(());
    }

    if config.observability.metrics_enabled {
        let addr: SocketAddr = config.observability.metrics_address.parse()?;
        metrics::init_metrics(addr)?;
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let shutdown = Shutdown::new();
    let server = HttpServer::new(host, &config);
    let server_shutdown = shutdown.subscribe();

    let signal_shutdown = shutdown.clone();
    tokio::spawn(async move {
        signals::shutdown_on_ctrl_c(&signal_shutdown).await;
    });

    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
