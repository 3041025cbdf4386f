//! Macro / Fundamental Context checklist.

use signal_core::traits::Checklist;
use signal_core::types::{ChecklistResult, ParsedSignal, PriceSeries, TimestampSource};

pub const SIGNAL_TIME_KNOWN: &str = "Signal time known?";
pub const CALENDAR_CLEAR: &str = "Economic calendar clear?";
pub const CENTRAL_BANK: &str = "Central bank bias supports direction?";
pub const RISK_SENTIMENT: &str = "Risk sentiment aligned?";

/// Macro / Fundamental Context checklist.
///
/// No fundamental data source is wired in, so apart from the signal time
/// every criterion is left for manual review.
#[derive(Debug, Clone, Default)]
pub struct MacroContextChecklist;

impl MacroContextChecklist {
    pub fn new() -> Self {
        Self
    }
}

impl Checklist for MacroContextChecklist {
    fn key(&self) -> &str {
        "macro"
    }

    fn name(&self) -> &str {
        "Macro / Fundamental Context"
    }

    fn description(&self) -> &str {
        "News, central bank and sentiment backdrop for the signal"
    }

    fn evaluate(&self, signal: &ParsedSignal, _data: Option<&PriceSeries>) -> ChecklistResult {
        let mut result = ChecklistResult::new();

        let stamp = format!("{} {}", signal.date, signal.time);
        match (signal.timestamp_source, signal.signal_time()) {
            (TimestampSource::Parsed, Some(_)) => result.push(
                SIGNAL_TIME_KNOWN,
                true,
                format!("Signal stamped {}", stamp),
            ),
            (TimestampSource::Parsed, None) => result.push(
                SIGNAL_TIME_KNOWN,
                false,
                format!("Signal timestamp {} is not a real calendar time", stamp),
            ),
            (TimestampSource::Defaulted, _) => result.push(
                SIGNAL_TIME_KNOWN,
                false,
                format!(
                    "No timestamp in message; {} is capture time, not signal time",
                    stamp
                ),
            ),
        }

        result.push_manual(
            CALENDAR_CLEAR,
            format!("check high-impact events around {}", stamp),
        );
        result.push_manual(CENTRAL_BANK, "no central bank data source configured");
        result.push_manual(RISK_SENTIMENT, "no sentiment data source configured");

        result
    }
}
