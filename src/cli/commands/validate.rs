//! Validate configuration command.

use anyhow::Result;
use signal_config::load_validated;
use std::path::Path;

pub fn run(config_path: &Path) -> Result<()> {
    println!("Validating configuration: {:?}", config_path);

    match load_validated(config_path) {
        Ok(config) => {
            println!("Configuration is valid!");
            println!();
            println!("App: {}", config.app.name);
            println!("Environment: {}", config.app.environment);
            println!("Log level: {}", config.logging.level);
            println!("Data dir: {}", config.storage.data_dir.display());
            println!("Reports dir: {}", config.storage.reports_dir.display());
            println!("Checklists: {}", config.checklists.enabled.join(", "));
            println!("Lookback: {} bars", config.checklists.settings.lookback);
            println!("Reward ratio: {}", config.analysis.reward_ratio);
        }
        Err(e) => {
            println!("Configuration error: {}", e);
            return Err(e.into());
        }
    }

    Ok(())
}
