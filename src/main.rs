mod cli;
mod config;
mod error;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use tokio::sync::RwLock;
use tracing_subscriber::EnvFilter;

use crate::error::Error;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = cli::parse();
    let config = config::load(&args.config).await?;
    tracing::info!(path = %args.config.display(), entries = config.deploy.len(), "configuration loaded");

    let expected_token = config
        .secret_key
        .filter(|key| !key.is_empty())
        .ok_or(Error::MissingKey("secret_key"))?;
    let reload_interval = config
        .reload_interval
        .ok_or(Error::MissingKey("reload_interval"))?;
    tracing::info!(reload_interval, "deploy table reload enabled");

    let deploy = Arc::new(RwLock::new(config.deploy));
    let _reload = config::spawn_reload_task(deploy.clone(), reload_interval, args.config.clone());

    let state = state::AppState::new(expected_token, deploy);
    let app = routes::app(state, &args.public_dir);

    let addr = SocketAddr::new(args.host, args.port);
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, public_dir = %args.public_dir.display(), "arca listening");

    axum::serve(listener, app).await?;
    Ok(())
}
