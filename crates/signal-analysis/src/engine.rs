//! Analysis pipeline.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use signal_checklists::ChecklistEngine;
use signal_core::error::{DeskError, ParseError};
use signal_core::traits::{Clock, MarketDataSource, SystemClock};
use signal_core::types::{ParsedSignal, PriceSeries};
use signal_parser::SignalParser;
use std::path::PathBuf;
use tracing::{debug, info, warn};

use crate::plan::TradePlan;
use crate::report::Report;
use crate::store::ReportStore;

/// Analysis configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisSettings {
    /// Bars examined when placing the trade-plan stop
    pub plan_lookback: usize,
    /// Target distance as a multiple of risk
    pub reward_ratio: Decimal,
    /// Decimal places kept on plan prices
    pub price_decimals: u32,
    /// Drop bars after the signal time when the message carries one
    pub align_to_signal_time: bool,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            plan_lookback: 20,
            reward_ratio: dec!(2),
            price_decimals: 5,
            align_to_signal_time: true,
        }
    }
}

/// Runs one signal through parsing, data lookup, checklists and report
/// composition.
pub struct Analyzer<C = SystemClock> {
    parser: SignalParser<C>,
    clock: C,
    engine: ChecklistEngine,
    data: Option<Box<dyn MarketDataSource>>,
    settings: AnalysisSettings,
}

impl Analyzer<SystemClock> {
    /// Create an analyzer backed by the local wall clock.
    pub fn new(engine: ChecklistEngine, settings: AnalysisSettings) -> Self {
        Self::with_clock(engine, settings, SystemClock)
    }
}

impl<C: Clock + Clone> Analyzer<C> {
    /// Create an analyzer with a custom clock.
    pub fn with_clock(engine: ChecklistEngine, settings: AnalysisSettings, clock: C) -> Self {
        Self {
            parser: SignalParser::with_clock(clock.clone()),
            clock,
            engine,
            data: None,
            settings,
        }
    }

    /// Attach a market data source.
    pub fn with_data_source(mut self, source: impl MarketDataSource + 'static) -> Self {
        self.data = Some(Box::new(source));
        self
    }

    pub fn engine(&self) -> &ChecklistEngine {
        &self.engine
    }

    /// Parse only.
    pub fn parse(&self, raw: &str) -> Result<ParsedSignal, ParseError> {
        self.parser.parse(raw)
    }

    /// Analyze a raw message and compose the report.
    ///
    /// Only parsing can fail; unusable market data degrades to "no data".
    pub fn analyze(&self, raw: &str) -> Result<Report, DeskError> {
        let signal = self.parser.parse(raw)?;
        info!(
            instrument = %signal.instrument,
            timeframe = %signal.timeframe,
            timestamp_source = %signal.timestamp_source,
            "Analyzing signal"
        );

        let data = self.load_data(&signal);
        let checklists = self.engine.run(&signal, data.as_ref());
        let trade_plan = TradePlan::derive(
            data.as_ref(),
            self.settings.plan_lookback,
            self.settings.reward_ratio,
            self.settings.price_decimals,
        );

        let report = Report::compose(raw, self.clock.now(), checklists, trade_plan)
            .with_signal(signal);
        info!(
            report_id = %report.id,
            checklists = report.checklists.len(),
            bias = %report.trade_plan.bias,
            "Report composed"
        );

        Ok(report)
    }

    /// Analyze and write the report to `store`.
    pub fn analyze_and_persist(
        &self,
        raw: &str,
        store: &ReportStore,
    ) -> Result<(Report, PathBuf), DeskError> {
        let report = self.analyze(raw)?;
        let path = store.persist(&report)?;
        Ok((report, path))
    }

    fn load_data(&self, signal: &ParsedSignal) -> Option<PriceSeries> {
        let source = self.data.as_ref()?;

        let series = match source.load(&signal.instrument, &signal.timeframe) {
            Ok(Some(series)) => series,
            Ok(None) => {
                info!(
                    source = source.name(),
                    instrument = %signal.instrument,
                    timeframe = %signal.timeframe,
                    "No market data available"
                );
                return None;
            }
            Err(e) => {
                warn!(source = source.name(), error = %e, "Market data unusable, continuing without it");
                return None;
            }
        };

        if !self.settings.align_to_signal_time || !signal.has_signal_time() {
            return Some(series);
        }
        match signal.signal_time() {
            Some(at) => {
                let clipped = series.up_to(at);
                debug!(
                    total = series.len(),
                    kept = clipped.len(),
                    "Aligned market data to signal time"
                );
                Some(clipped)
            }
            None => Some(series),
        }
    }
}
