#![forbid(unsafe_code)]

use anyhow::{Context, Result};
use tracing::{error, info};

use tri_list::{run, AppConfig};

#[tokio::main]
async fn main() -> Result<()> {
    let config = AppConfig::load().context("failed to load configuration")?;

    rolling_logger::init_logger(config.log_dir.clone(), "tri-list")
        .context("failed to init rolling logger")?;
    info!(?config, "Starting");

    if let Err(e) = run(config).await {
        error!("Fatal: {:#}", e);
        return Err(e);
    }
    Ok(())
}
