#![recursion_limit = "256"]

mod config;
mod routes;

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = config::Config::from_env()?;
    let app = routes::app()?;
    let listener = tokio::net::TcpListener::bind(config.socket_addr()).await?;

    tracing::info!(addr = %config.socket_addr(), backend = %client::config::BACKEND_URL, "blogweb listening");
    axum::serve(listener, app).await?;
    Ok(())
}
