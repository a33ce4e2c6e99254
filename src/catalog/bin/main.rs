use std::net::SocketAddr;
use std::path::Path;
use tracing::info;
use bookshelf::catalog::controller::build_router;
use bookshelf::core::controller::AppState;
use bookshelf::core::domain::Configuration;
use bookshelf::gateway::GatewayPublisherVia;
use bookshelf::utils::logging::setup_tracing;

const CONFIG_ENV: &str = "BOOKSHELF_CONFIG";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_tracing();

    let config = match std::env::var(CONFIG_ENV) {
        Ok(path) => Configuration::load(Path::new(path.as_str()))?,
        Err(_) => Configuration::new("dev"),
    };
    let addr: SocketAddr = config.listen_addr.parse()?;
    info!(session_id = config.session_id.as_str(), %addr, "starting bookshelf");

    let app = build_router(AppState::new(config, GatewayPublisherVia::Logs));

    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await?;
    Ok(())
}
