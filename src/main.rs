use log::info;

mod aggregator;
mod config;
mod error;
mod handlers;
mod news;
mod server;
mod stock;
mod symbols;

use config::AppConfig;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    pretty_env_logger::init();
    info!("Starting stock dashboard server...");

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => panic!("Configuration error: {e}"),
    };

    info!("🚀 Configuration loaded, listening on port {}", config.port);

    if let Err(e) = server::run(config).await {
        panic!("Server failed to start: {e}");
    }
}
