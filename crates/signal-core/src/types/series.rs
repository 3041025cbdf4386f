//! Historical price bars.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A single historical bar.
///
/// Only the close is guaranteed; the other fields are present when the data
/// file carries them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceBar {
    /// Bar open time
    pub time: NaiveDateTime,
    /// Opening price
    pub open: Option<f64>,
    /// Highest price
    pub high: Option<f64>,
    /// Lowest price
    pub low: Option<f64>,
    /// Closing price
    pub close: f64,
    /// Traded volume
    pub volume: Option<f64>,
}

impl PriceBar {
    /// Create a close-only bar.
    pub fn new(time: NaiveDateTime, close: f64) -> Self {
        Self {
            time,
            open: None,
            high: None,
            low: None,
            close,
            volume: None,
        }
    }

    /// Attach open/high/low.
    pub fn with_ohl(mut self, open: f64, high: f64, low: f64) -> Self {
        self.open = Some(open);
        self.high = Some(high);
        self.low = Some(low);
        self
    }

    /// Attach volume.
    pub fn with_volume(mut self, volume: f64) -> Self {
        self.volume = Some(volume);
        self
    }

    /// High, falling back to the close.
    #[inline]
    pub fn high_or_close(&self) -> f64 {
        self.high.unwrap_or(self.close)
    }

    /// Low, falling back to the close.
    #[inline]
    pub fn low_or_close(&self) -> f64 {
        self.low.unwrap_or(self.close)
    }
}

/// Chronologically ordered bars for one (instrument, timeframe) pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceSeries {
    instrument: String,
    timeframe: String,
    bars: Vec<PriceBar>,
}

impl PriceSeries {
    /// Create a series, sorting bars oldest first.
    pub fn new(instrument: impl Into<String>, timeframe: impl Into<String>, mut bars: Vec<PriceBar>) -> Self {
        bars.sort_by_key(|b| b.time);
        Self {
            instrument: instrument.into(),
            timeframe: timeframe.into(),
            bars,
        }
    }

    pub fn instrument(&self) -> &str {
        &self.instrument
    }

    pub fn timeframe(&self) -> &str {
        &self.timeframe
    }

    pub fn bars(&self) -> &[PriceBar] {
        &self.bars
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// Most recent bar.
    pub fn last(&self) -> Option<&PriceBar> {
        self.bars.last()
    }

    /// All closes, oldest first.
    pub fn closes(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.close).collect()
    }

    /// The last `n` closes, oldest first. Fewer are returned if the series is
    /// shorter.
    pub fn last_closes(&self, n: usize) -> Vec<f64> {
        self.tail(n).iter().map(|b| b.close).collect()
    }

    /// The last `n` bars, oldest first.
    pub fn tail(&self, n: usize) -> &[PriceBar] {
        let start = self.bars.len().saturating_sub(n);
        &self.bars[start..]
    }

    /// Volumes of the last `n` bars, or `None` if any of them lacks volume.
    pub fn last_volumes(&self, n: usize) -> Option<Vec<f64>> {
        self.tail(n).iter().map(|b| b.volume).collect()
    }

    /// A copy holding only bars at or before `instant`.
    pub fn up_to(&self, instant: NaiveDateTime) -> PriceSeries {
        Self {
            instrument: self.instrument.clone(),
            timeframe: self.timeframe.clone(),
            bars: self
                .bars
                .iter()
                .filter(|b| b.time <= instant)
                .copied()
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(day: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, day)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_series_sorted_on_construction() {
        let series = PriceSeries::new(
            "EURUSD",
            "D1",
            vec![
                PriceBar::new(at(3), 1.3),
                PriceBar::new(at(1), 1.1),
                PriceBar::new(at(2), 1.2),
            ],
        );
        assert_eq!(series.closes(), vec![1.1, 1.2, 1.3]);
        assert_eq!(series.last().unwrap().close, 1.3);
    }

    #[test]
    fn test_last_closes_shorter_than_requested() {
        let series = PriceSeries::new("EURUSD", "D1", vec![PriceBar::new(at(1), 1.1)]);
        assert_eq!(series.last_closes(3), vec![1.1]);
        assert_eq!(series.last_closes(0), Vec::<f64>::new());
    }

    #[test]
    fn test_up_to() {
        let series = PriceSeries::new(
            "EURUSD",
            "D1",
            vec![
                PriceBar::new(at(1), 1.1),
                PriceBar::new(at(2), 1.2),
                PriceBar::new(at(3), 1.3),
            ],
        );
        let clipped = series.up_to(at(2));
        assert_eq!(clipped.closes(), vec![1.1, 1.2]);
        assert_eq!(clipped.instrument(), "EURUSD");
    }

    #[test]
    fn test_last_volumes_requires_every_bar() {
        let series = PriceSeries::new(
            "EURUSD",
            "D1",
            vec![
                PriceBar::new(at(1), 1.1),
                PriceBar::new(at(2), 1.2).with_volume(10.0),
            ],
        );
        assert_eq!(series.last_volumes(1), Some(vec![10.0]));
        assert_eq!(series.last_volumes(2), None);
    }
}
