//! Field extraction.

use signal_core::error::ParseError;
use signal_core::traits::{Clock, SystemClock};
use signal_core::types::{ParsedSignal, TimestampSource, DATE_FORMAT, TIME_FORMAT};
use tracing::debug;

use crate::normalize::normalize;

/// Time used when a message carries a date but no time.
const MIDNIGHT: &str = "00:00";

/// Fragments removed from the message body before splitting.
const NOISE: [&str; 3] = ["[", "]", "Chart"];

/// Parser for free-form signal messages.
///
/// The clock is only consulted when a message has no leading date.
#[derive(Debug, Clone, Default)]
pub struct SignalParser<C = SystemClock> {
    clock: C,
}

impl SignalParser<SystemClock> {
    /// Create a parser backed by the local wall clock.
    pub fn new() -> Self {
        Self { clock: SystemClock }
    }
}

impl<C: Clock> SignalParser<C> {
    /// Create a parser with a custom clock.
    pub fn with_clock(clock: C) -> Self {
        Self { clock }
    }

    /// Parse a raw message.
    ///
    /// Fails with [`ParseError`] when fewer than two fields (instrument and
    /// timeframe) remain after cleaning.
    pub fn parse(&self, raw: &str) -> Result<ParsedSignal, ParseError> {
        let text = normalize(raw);
        if text.is_empty() {
            return Err(ParseError::Empty);
        }

        let (date, time, rest, timestamp_source) = match split_timestamp(&text) {
            Some(leading) => (
                leading.date.to_string(),
                leading.time.unwrap_or(MIDNIGHT).to_string(),
                leading.rest,
                TimestampSource::Parsed,
            ),
            None => {
                let now = self.clock.now();
                (
                    now.format(DATE_FORMAT).to_string(),
                    now.format(TIME_FORMAT).to_string(),
                    text.as_str(),
                    TimestampSource::Defaulted,
                )
            }
        };

        let body = strip_noise(rest);
        let fields = split_fields(&body);
        if fields.len() < 2 {
            debug!(found = fields.len(), "Signal has too few fields");
            return Err(ParseError::InsufficientStructure {
                found: fields.len(),
            });
        }

        let signal = ParsedSignal {
            date,
            time,
            instrument: fields[0].to_uppercase(),
            timeframe: fields[1].to_uppercase(),
            description: fields.get(2).map(|d| d.to_string()).unwrap_or_default(),
            timestamp_source,
        };

        debug!(
            instrument = %signal.instrument,
            timeframe = %signal.timeframe,
            timestamp_source = %signal.timestamp_source,
            "Parsed signal"
        );

        Ok(signal)
    }
}

/// A leading `YYYY.MM.DD [HH:MM]` prefix and the text after it.
#[derive(Debug, PartialEq)]
struct Leading<'a> {
    date: &'a str,
    time: Option<&'a str>,
    rest: &'a str,
}

/// Match a leading date with an optional time.
///
/// Only the digit shape is checked here, so `2024.13.40` still counts as a
/// date prefix.
fn split_timestamp(text: &str) -> Option<Leading<'_>> {
    let date = text.get(..10).filter(|d| matches_shape(d, "dddd.dd.dd"))?;
    let after_date = text[10..].trim_start();

    let (time, rest) = match after_date.get(..5).filter(|t| matches_shape(t, "dd:dd")) {
        Some(time) => (Some(time), after_date[5..].trim_start()),
        None => (None, after_date),
    };

    Some(Leading { date, time, rest })
}

/// `d` in `shape` matches an ASCII digit; every other byte matches itself.
fn matches_shape(s: &str, shape: &str) -> bool {
    s.len() == shape.len()
        && s.bytes().zip(shape.bytes()).all(|(c, p)| match p {
            b'd' => c.is_ascii_digit(),
            _ => c == p,
        })
}

fn strip_noise(text: &str) -> String {
    NOISE
        .iter()
        .fold(text.to_string(), |acc, noise| acc.replace(noise, ""))
        .trim()
        .to_string()
}

/// Split into at most three fields: two whitespace-delimited tokens and the
/// untouched remainder.
fn split_fields(text: &str) -> Vec<&str> {
    let mut fields = Vec::with_capacity(3);
    let mut rest = text.trim_start();

    while fields.len() < 2 && !rest.is_empty() {
        let end = rest.find(char::is_whitespace).unwrap_or(rest.len());
        fields.push(&rest[..end]);
        rest = rest[end..].trim_start();
    }
    if !rest.is_empty() {
        fields.push(rest);
    }

    fields
}
