//! Tolerant parser for free-form trade-signal messages.
//!
//! Messages are typically pasted from chat or charting tools, e.g.
//! `2024.03.15 09:30 EURUSD H1 breakout trap [Chart]`. The parser extracts
//! an optional leading timestamp, the instrument, the timeframe and whatever
//! free text remains.

mod normalize;
mod parser;

pub use normalize::normalize;
pub use parser::SignalParser;

use signal_core::error::ParseError;
use signal_core::types::ParsedSignal;

/// Parse a message using the local wall clock for missing timestamps.
pub fn parse_signal(raw: &str) -> Result<ParsedSignal, ParseError> {
    SignalParser::new().parse(raw)
}
