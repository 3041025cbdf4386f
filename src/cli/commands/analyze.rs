//! Analyze command implementation.

use anyhow::{Context, Result};
use signal_analysis::{Analyzer, Report, ReportStore};
use signal_checklists::ChecklistRegistry;
use signal_config::load_validated;
use signal_core::DeskError;
use signal_data::CsvMarketData;
use std::path::Path;
use tracing::info;

use super::parse_failure;
use crate::cli::{AnalyzeArgs, OutputFormat};

pub fn run(args: AnalyzeArgs, config_path: &Path) -> Result<()> {
    let config = load_validated(config_path).context("Failed to load configuration")?;
    let raw = args.input.read()?;

    let engine = ChecklistRegistry::new()
        .build_engine(&config.checklists.enabled, &config.checklists.settings)
        .context("Failed to build checklist engine")?;
    info!(checklists = ?engine.names(), "Checklist engine ready");

    let analyzer = Analyzer::new(engine, config.analysis.clone())
        .with_data_source(CsvMarketData::new(&config.storage.data_dir));

    let outcome = if args.no_save {
        analyzer.analyze(&raw).map(|report| (report, None))
    } else {
        let store = ReportStore::new(&config.storage.reports_dir);
        analyzer
            .analyze_and_persist(&raw, &store)
            .map(|(report, path)| (report, Some(path)))
    };

    let (report, saved) = match outcome {
        Ok(done) => done,
        Err(DeskError::Parse(e)) => return Err(parse_failure(e)),
        Err(e) => return Err(e).context("Analysis failed"),
    };

    print_report(&report, args.output)?;
    if let Some(path) = saved {
        eprintln!("Report saved to {}", path.display());
    }

    Ok(())
}

fn print_report(report: &Report, output: OutputFormat) -> Result<()> {
    match output {
        OutputFormat::Json => println!("{}", report.to_json()?),
        OutputFormat::Text => print!("{}", report.render()),
    }
    Ok(())
}
