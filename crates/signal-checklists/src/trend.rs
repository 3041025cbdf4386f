//! Price helpers shared by checklists and trade planning.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Direction of the last three closes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    /// Strictly increasing
    Up,
    /// Strictly decreasing
    Down,
    /// Anything else
    Unclear,
}

impl Trend {
    /// Number of closes [`Trend::of_last_three`] needs.
    pub const REQUIRED_CLOSES: usize = 3;

    /// Classify the last three closes, oldest first.
    ///
    /// Returns `None` with fewer than three closes.
    pub fn of_last_three(closes: &[f64]) -> Option<(Trend, [f64; 3])> {
        let n = closes.len();
        if n < Self::REQUIRED_CLOSES {
            return None;
        }
        let window = [closes[n - 3], closes[n - 2], closes[n - 1]];
        let [a, b, c] = window;

        let trend = if c > b && b > a {
            Trend::Up
        } else if c < b && b < a {
            Trend::Down
        } else {
            Trend::Unclear
        };
        Some((trend, window))
    }

    pub fn is_clear(&self) -> bool {
        !matches!(self, Trend::Unclear)
    }
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Trend::Up => "uptrend",
            Trend::Down => "downtrend",
            Trend::Unclear => "no clear trend",
        };
        write!(f, "{}", s)
    }
}

/// Arithmetic mean, `None` for an empty slice.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Distance of `value` from `level` as a percentage of `level`.
pub fn pct_distance(value: f64, level: f64) -> f64 {
    if level == 0.0 {
        return if value == 0.0 { 0.0 } else { f64::INFINITY };
    }
    ((value - level) / level).abs() * 100.0
}
