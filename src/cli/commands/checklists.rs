//! List checklists command.

use anyhow::Result;
use signal_checklists::ChecklistRegistry;
use signal_config::load_config;
use std::path::Path;

pub fn run(config_path: &Path) -> Result<()> {
    let registry = ChecklistRegistry::new();
    let enabled = load_config(config_path)
        .map(|config| config.checklists.enabled)
        .unwrap_or_else(|_| ChecklistRegistry::KEYS.iter().map(|k| k.to_string()).collect());

    println!("Available Checklists");
    println!("═══════════════════════════════════════════════════════════");
    println!();

    for info in registry.list() {
        let marker = if enabled.contains(&info.key) { "*" } else { " " };
        println!("{} {} ({})", marker, info.name, info.key);
        println!("  ───────────────────────────────────────────────────────");
        println!("  {}", info.description);
        println!();
    }

    println!("* enabled in {}", config_path.display());
    println!("Run order: {}", enabled.join(", "));

    Ok(())
}
