//! Parsed trade-signal record.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;

/// `chrono` format of [`ParsedSignal::date`].
pub const DATE_FORMAT: &str = "%Y.%m.%d";
/// `chrono` format of [`ParsedSignal::time`].
pub const TIME_FORMAT: &str = "%H:%M";

/// Where the timestamp of a parsed signal came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimestampSource {
    /// The message carried a leading date (and possibly a time).
    Parsed,
    /// The message had no leading date; capture time was used instead.
    Defaulted,
}

impl fmt::Display for TimestampSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TimestampSource::Parsed => "parsed",
            TimestampSource::Defaulted => "defaulted",
        };
        write!(f, "{}", s)
    }
}

/// A trade signal extracted from free-form text.
///
/// Built once per message by the parser and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedSignal {
    /// Calendar date, `YYYY.MM.DD`
    pub date: String,
    /// Clock time, `HH:MM`
    pub time: String,
    /// Upper-cased instrument symbol
    pub instrument: String,
    /// Upper-cased timeframe code (e.g. `M15`, `H4`, `D1`)
    pub timeframe: String,
    /// Remaining free text, may be empty
    pub description: String,
    /// Whether `date`/`time` were supplied by the message
    pub timestamp_source: TimestampSource,
}

impl ParsedSignal {
    /// Whether the message supplied its own timestamp.
    pub fn has_signal_time(&self) -> bool {
        self.timestamp_source == TimestampSource::Parsed
    }

    /// Combine `date` and `time` into an instant.
    ///
    /// Returns `None` when the fields do not form a real calendar time, e.g.
    /// `2024.13.40`.
    pub fn signal_time(&self) -> Option<NaiveDateTime> {
        let date = NaiveDate::parse_from_str(&self.date, DATE_FORMAT).ok()?;
        let time = NaiveTime::parse_from_str(&self.time, TIME_FORMAT).ok()?;
        Some(date.and_time(time))
    }
}

impl fmt::Display for ParsedSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.date, self.time, self.instrument, self.timeframe
        )?;
        if !self.description.is_empty() {
            write!(f, " {}", self.description)?;
        }
        Ok(())
    }
}
