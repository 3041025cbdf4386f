//! Core data types for signal analysis.

mod checklist;
mod series;
mod signal;

pub use checklist::{ChecklistResult, Criterion, Verdict, MANUAL_REVIEW};
pub use series::{PriceBar, PriceSeries};
pub use signal::{ParsedSignal, TimestampSource, DATE_FORMAT, TIME_FORMAT};
