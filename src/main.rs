use std::net::{IpAddr, SocketAddr};

use clap::Parser;
use synapticore_lite::config::{init_tracing, load_env, AppConfig, ServiceInfo};
use synapticore_lite::{create_app, AppState};

#[derive(Parser, Debug)]
#[command(author, version, about = "SynaptiCore Lite API server", long_about = None)]
struct Cli {
    /// Address to bind, overrides APP_HOST
    #[arg(long)]
    host: Option<IpAddr>,
    /// Port to listen on, overrides APP_PORT
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    load_env();
    init_tracing();

    let cli = Cli::parse();
    let mut config = AppConfig::from_env()?;
    if let Some(host) = cli.host {
        config.host = host;
    }
    if let Some(port) = cli.port {
        config.port = port;
    }

    let app = create_app(AppState::new(ServiceInfo::default()), config.port)?;

    let addr = SocketAddr::new(config.host, config.port);
    tracing::info!("listening on {}", addr);
    tracing::info!("docs available at http://localhost:{}/docs", config.port);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
        return;
    }
    tracing::info!("shutting down");
}
