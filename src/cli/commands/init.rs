//! Init command: create the working directories.

use anyhow::{Context, Result};
use signal_config::load_validated;
use std::path::Path;
use tracing::info;

pub fn run(config_path: &Path) -> Result<()> {
    let config = load_validated(config_path).context("Failed to load configuration")?;
    let storage = &config.storage;

    storage
        .provision()
        .context("Failed to create storage directories")?;
    info!(
        data_dir = %storage.data_dir.display(),
        reports_dir = %storage.reports_dir.display(),
        "Storage directories ready"
    );

    println!("Data directory:    {}", storage.data_dir.display());
    println!("Reports directory: {}", storage.reports_dir.display());
    println!();
    println!("Place market data as <INSTRUMENT>_<TIMEFRAME>.csv in the data directory.");

    Ok(())
}
