//! Feedwatch - Main Entry Point

use api::{init_logging, run_server, Settings};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::load()?;
    init_logging(settings.json_logs);

    info!("=== Feedwatch v{} ===", env!("CARGO_PKG_VERSION"));
    info!("Starting feed condition classifier...");

    run_server(&settings).await?;

    Ok(())
}
