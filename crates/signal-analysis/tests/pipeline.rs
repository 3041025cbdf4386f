//! End-to-end: CSV data on disk through to a persisted report.

use chrono::NaiveDate;
use signal_analysis::{AnalysisSettings, Analyzer, ReportStore};
use signal_checklists::{ChecklistRegistry, ChecklistSettings};
use signal_core::error::{DeskError, PersistenceError};
use signal_core::traits::FixedClock;
use signal_data::CsvMarketData;
use std::fs;
use tempfile::TempDir;

const SIGNAL: &str = "2024.03.15 09:30 EURUSD H1 buy the breakout trap [Chart]";

fn clock(second: u32) -> FixedClock {
    FixedClock(
        NaiveDate::from_ymd_opt(2024, 3, 15)
            .unwrap()
            .and_hms_opt(18, 0, second)
            .unwrap(),
    )
}

fn analyzer(data_dir: &std::path::Path, second: u32) -> Analyzer<FixedClock> {
    let engine = ChecklistRegistry::new()
        .default_engine(&ChecklistSettings::default())
        .unwrap();
    Analyzer::with_clock(engine, AnalysisSettings::default(), clock(second))
        .with_data_source(CsvMarketData::new(data_dir))
}

fn write_data(dir: &TempDir) {
    fs::write(
        dir.path().join("EURUSD_H1.csv"),
        "time,open,high,low,close,volume\n\
         2024-03-15 06:00,1.0990,1.1010,1.0980,1.1000,900\n\
         2024-03-15 07:00,1.1000,1.1030,1.0995,1.1020,1000\n\
         2024-03-15 08:00,1.1020,1.1060,1.1010,1.1050,1100\n\
         2024-03-15 09:00,1.1050,1.1080,1.1040,1.1070,1500\n\
         2024-03-15 10:00,1.1070,1.1075,1.0900,1.0950,2000\n",
    )
    .unwrap();
}

#[test]
fn analyze_and_persist_full_report() {
    let data = TempDir::new().unwrap();
    let reports = TempDir::new().unwrap();
    write_data(&data);

    let (report, path) = analyzer(data.path(), 0)
        .analyze_and_persist(SIGNAL, &ReportStore::new(reports.path()))
        .unwrap();

    assert_eq!(
        path.file_name().unwrap().to_str().unwrap(),
        "report_2024.03.15_20240315_180000.txt"
    );

    let text = fs::read_to_string(&path).unwrap();
    assert_eq!(text, report.render());

    // Every section and criterion appears verbatim, in order
    let mut cursor = 0;
    for section in &report.checklists {
        let at = text[cursor..].find(&section.name).unwrap();
        cursor += at;
        for criterion in &section.result {
            let at = text[cursor..].find(&criterion.criterion).unwrap();
            cursor += at;
        }
    }
    assert!(text[cursor..].contains("Trade Plan"));

    // The 10:00 bar is after the signal and must not be seen
    let structure = &report.checklists[0].result;
    assert!(structure.criteria()[0]
        .justification
        .contains("[1.102, 1.105, 1.107] indicate uptrend"));
    assert_eq!(report.trade_plan.bias, signal_analysis::Bias::Bullish);

    let view = report.view();
    assert_eq!(view.sections.len(), 4);
    assert_eq!(view.signal.unwrap().instrument, "EURUSD");
}

#[test]
fn successive_invocations_do_not_overwrite() {
    let data = TempDir::new().unwrap();
    let reports = TempDir::new().unwrap();
    let store = ReportStore::new(reports.path());

    let (_, first) = analyzer(data.path(), 0)
        .analyze_and_persist(SIGNAL, &store)
        .unwrap();
    let (_, second) = analyzer(data.path(), 1)
        .analyze_and_persist(SIGNAL, &store)
        .unwrap();
    let (_, third) = analyzer(data.path(), 1)
        .analyze_and_persist(SIGNAL, &store)
        .unwrap();

    assert_ne!(first, second);
    assert_ne!(second, third);
    assert_eq!(fs::read_dir(reports.path()).unwrap().count(), 3);
}

#[test]
fn corrupt_market_data_still_produces_report() {
    let data = TempDir::new().unwrap();
    fs::write(
        data.path().join("EURUSD_H1.csv"),
        "time,close\n2024-03-15 06:00,1.1\nbroken,row\n",
    )
    .unwrap();

    let report = analyzer(data.path(), 0).analyze(SIGNAL).unwrap();
    assert!(report.checklists[0].result.criteria()[0]
        .justification
        .starts_with("Insufficient data"));
}

#[test]
fn missing_report_directory_is_fatal() {
    let data = TempDir::new().unwrap();
    let reports = TempDir::new().unwrap();
    let store = ReportStore::new(reports.path().join("nope"));

    let err = analyzer(data.path(), 0)
        .analyze_and_persist(SIGNAL, &store)
        .unwrap_err();
    assert!(matches!(
        err,
        DeskError::Persistence(PersistenceError::MissingDirectory(_))
    ));
}

#[test]
fn unparseable_signal_writes_nothing() {
    let data = TempDir::new().unwrap();
    let reports = TempDir::new().unwrap();

    let err = analyzer(data.path(), 0)
        .analyze_and_persist("gbpjpy", &ReportStore::new(reports.path()))
        .unwrap_err();
    assert!(matches!(err, DeskError::Parse(_)));
    assert_eq!(fs::read_dir(reports.path()).unwrap().count(), 0);
}
