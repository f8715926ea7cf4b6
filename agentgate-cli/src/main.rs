use std::net::SocketAddr;
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use agentgate_http::runtime::{GatewayConfig, GatewayRuntime};

mod engine;

use engine::EchoEngine;

#[derive(Parser, Debug)]
#[command(name = "agentgate", version)]
#[command(about = "Agentgate - thread/run gateway in front of an external agent graph")]
struct Cli {
    /// Address to bind the gateway on
    #[arg(long, default_value = "127.0.0.1:8000")]
    addr: SocketAddr,
    /// Disable permissive CORS
    #[arg(long)]
    no_cors: bool,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = GatewayConfig {
        enable_cors: !cli.no_cors,
        ..GatewayConfig::default()
    };
    let runtime = GatewayRuntime::with_config(Arc::new(EchoEngine), config);
    let app = runtime.router();

    let listener = tokio::net::TcpListener::bind(cli.addr).await?;
    tracing::info!(addr = %cli.addr, "agentgate listening");
    axum::serve(listener, app).await
}
