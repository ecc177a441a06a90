use category_server::Config;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env()?;
    let addr = config.addr();
    let listener = TcpListener::bind(&addr).await?;
    info!(%addr, seeded = config.seed, "listening");
    category_server::run(listener, config.store()).await?;
    Ok(())
}
