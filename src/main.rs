//! Trade-signal desk CLI application.

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use signal_config::load_config;
use signal_monitor::setup_logging;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logging follows the config file unless overridden on the command line;
    // a broken config is reported by the command itself
    let logging = load_config(&cli.config)
        .map(|config| config.logging)
        .unwrap_or_default();
    let log_level = cli
        .log_level
        .as_ref()
        .map(cli::LogLevel::as_str)
        .unwrap_or(logging.level.as_str());
    let json = cli.json_logs || logging.format == "json";
    let _guard = setup_logging(log_level, json, logging.file.as_deref());

    // Execute command
    match cli.command {
        Commands::Analyze(args) => cli::commands::analyze::run(args, &cli.config),
        Commands::Parse(args) => cli::commands::parse::run(args),
        Commands::Checklists => cli::commands::checklists::run(&cli.config),
        Commands::Init => cli::commands::init::run(&cli.config),
        Commands::ValidateConfig => cli::commands::validate::run(&cli.config),
    }
}
