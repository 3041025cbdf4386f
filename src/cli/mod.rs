//! CLI definitions.

pub mod commands;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::io::Read;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "signal-desk")]
#[command(author, version, about = "Trade-signal parser and checklist report generator")]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: PathBuf,

    /// Log level (defaults to the configured level)
    #[arg(short, long)]
    pub log_level: Option<LogLevel>,

    /// Enable JSON log format
    #[arg(long)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Clone, ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

#[derive(Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a signal and save the report
    Analyze(AnalyzeArgs),
    /// Parse a signal without analyzing it
    Parse(ParseArgs),
    /// List available checklists
    Checklists,
    /// Create the data and reports directories
    Init,
    /// Validate configuration
    ValidateConfig,
}

/// Where the raw signal text comes from.
#[derive(clap::Args)]
pub struct SignalInput {
    /// Signal text; read from stdin when omitted
    #[arg(trailing_var_arg = true, conflicts_with = "file")]
    pub signal: Vec<String>,

    /// Read the signal from a file
    #[arg(short, long)]
    pub file: Option<PathBuf>,
}

impl SignalInput {
    /// Raw signal text from the argument, the file, or stdin.
    pub fn read(&self) -> Result<String> {
        if let Some(path) = &self.file {
            return std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read signal from {}", path.display()));
        }
        if !self.signal.is_empty() {
            return Ok(self.signal.join(" "));
        }

        let mut raw = String::new();
        std::io::stdin()
            .read_to_string(&mut raw)
            .context("Failed to read signal from stdin")?;
        Ok(raw)
    }
}

#[derive(clap::Args)]
pub struct AnalyzeArgs {
    #[command(flatten)]
    pub input: SignalInput,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub output: OutputFormat,

    /// Print the report without writing it to the reports directory
    #[arg(long)]
    pub no_save: bool,
}

#[derive(clap::Args)]
pub struct ParseArgs {
    #[command(flatten)]
    pub input: SignalInput,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub output: OutputFormat,
}
