//! Fixtures shared by checklist tests.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use signal_core::types::{ParsedSignal, PriceBar, PriceSeries, TimestampSource};

pub fn start() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, 15)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

pub fn signal(description: &str) -> ParsedSignal {
    ParsedSignal {
        date: "2024.03.15".into(),
        time: "09:30".into(),
        instrument: "EURUSD".into(),
        timeframe: "H1".into(),
        description: description.into(),
        timestamp_source: TimestampSource::Parsed,
    }
}

/// Hourly close-only bars.
pub fn closes(values: &[f64]) -> PriceSeries {
    let bars = values
        .iter()
        .enumerate()
        .map(|(i, &c)| PriceBar::new(start() + Duration::hours(i as i64), c))
        .collect();
    PriceSeries::new("EURUSD", "H1", bars)
}

/// Hourly bars from `(high, low, close, volume)` tuples.
pub fn bars(values: &[(f64, f64, f64, f64)]) -> PriceSeries {
    let bars = values
        .iter()
        .enumerate()
        .map(|(i, &(high, low, close, volume))| {
            PriceBar::new(start() + Duration::hours(i as i64), close)
                .with_ohl(close, high, low)
                .with_volume(volume)
        })
        .collect();
    PriceSeries::new("EURUSD", "H1", bars)
}
