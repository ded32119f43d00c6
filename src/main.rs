use std::net::SocketAddr;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use campusd::http::{build_router, AppState};
use campusd::store::Store;

#[derive(Parser, Debug)]
#[command(name = "campusd")]
struct Args {
    /// Address to listen on.
    #[arg(long, default_value = "127.0.0.1:5000")]
    addr: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let addr: SocketAddr = args
        .addr
        .parse()
        .with_context(|| format!("invalid listen address: {}", args.addr))?;
    let state = AppState::new(Store::new());
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("campusd listening on {addr}");
    axum::serve(listener, app).await?;
    Ok(())
}
