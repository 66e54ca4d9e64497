use std::path::{Path, PathBuf};
use tracing::{info, error, warn};

use satcat_media_server::config::Config;

const CONFIG_PATH: &str = "config.toml";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_target(false)
        .with_thread_ids(true)
        .with_level(true)
        .init();

    // Load configuration
    let config = if Path::new(CONFIG_PATH).exists() {
        Config::load(CONFIG_PATH)?
    } else {
        warn!("{} not found, using defaults", CONFIG_PATH);
        Config::default()
    };
    info!("Loaded configuration: {:?}", config);

    // Validate public directory exists
    let public_path = PathBuf::from(&config.public_directory);
    if !public_path.is_dir() {
        error!("Public directory does not exist: {}", config.public_directory);
        anyhow::bail!("Public directory not found: {}", config.public_directory);
    }
    if !public_path.join("satellites.json").exists() {
        warn!("No satellites.json in {}", public_path.display());
    }

    info!("Serving static files from: {}", public_path.display());

    let app = satcat_media_server::router(&config);

    let addr = config.socket_addr();
    info!("Starting media server on http://{}", addr);
    info!("Dataset URL: http://{}{}/satellites.json", addr, config.mount_path());

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
