use greeter_server::{logger, ServerConfig, ServerError};
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    let config = ServerConfig::from_env()?;
    logger::init(&config.log_level)?;

    let addr = config.addr();
    let listener = TcpListener::bind(&addr).await?;
    info!(%addr, "listening");
    greeter_server::run(listener).await?;
    Ok(())
}
