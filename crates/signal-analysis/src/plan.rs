//! Trade plan derivation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use signal_checklists::Trend;
use signal_core::types::PriceSeries;
use std::fmt;

const UNREPRESENTABLE: &str = "Price levels could not be represented; set levels manually";

/// Directional bias of a trade plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Bias {
    Bullish,
    Bearish,
    Neutral,
}

impl fmt::Display for Bias {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Bias::Bullish => "Bullish",
            Bias::Bearish => "Bearish",
            Bias::Neutral => "Neutral",
        };
        write!(f, "{}", s)
    }
}

/// Entry, stop and target suggested by recent price action.
///
/// Levels are absent whenever the data does not support a directional plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradePlan {
    pub bias: Bias,
    pub entry: Option<Decimal>,
    pub stop_loss: Option<Decimal>,
    pub take_profit: Option<Decimal>,
    pub notes: String,
}

impl TradePlan {
    /// A plan with no levels.
    pub fn manual(notes: impl Into<String>) -> Self {
        Self {
            bias: Bias::Neutral,
            entry: None,
            stop_loss: None,
            take_profit: None,
            notes: notes.into(),
        }
    }

    /// Derive a plan from the last closes of `data`.
    ///
    /// Bias follows the last three closes. Entry is the last close, the stop
    /// sits at the extreme of the last `lookback` bars and the target is
    /// `reward_ratio` times the risk away from entry.
    pub fn derive(
        data: Option<&PriceSeries>,
        lookback: usize,
        reward_ratio: Decimal,
        decimals: u32,
    ) -> Self {
        let Some(series) = data else {
            return Self::manual("No price data; set entry, stop-loss and take-profit manually");
        };
        let closes = series.last_closes(lookback);
        let Some((trend, _)) = Trend::of_last_three(&closes) else {
            return Self::manual(format!(
                "Insufficient price data ({} closes); set levels manually",
                closes.len()
            ));
        };

        let window = series.tail(lookback);
        let (bias, stop) = match trend {
            Trend::Up => (
                Bias::Bullish,
                window.iter().map(|b| b.low_or_close()).fold(f64::INFINITY, f64::min),
            ),
            Trend::Down => (
                Bias::Bearish,
                window
                    .iter()
                    .map(|b| b.high_or_close())
                    .fold(f64::NEG_INFINITY, f64::max),
            ),
            Trend::Unclear => {
                return Self::manual("No clear trend in the last 3 closes; wait for structure")
            }
        };

        let last = closes[closes.len() - 1];
        let (Some(entry), Some(stop)) = (to_price(last, decimals), to_price(stop, decimals)) else {
            return Self::manual(UNREPRESENTABLE);
        };

        let Some(risk) = entry.checked_sub(stop).map(|d| d.abs()) else {
            return Self::manual(UNREPRESENTABLE);
        };
        if risk.is_zero() {
            return Self::manual("Stop would equal entry; set levels manually");
        }
        let take_profit = risk.checked_mul(reward_ratio).and_then(|reward| match bias {
            Bias::Bearish => entry.checked_sub(reward),
            _ => entry.checked_add(reward),
        });
        let Some(take_profit) = take_profit else {
            return Self::manual(UNREPRESENTABLE);
        };

        Self {
            bias,
            entry: Some(entry),
            stop_loss: Some(stop),
            take_profit: Some(take_profit.round_dp(decimals).normalize()),
            notes: format!(
                "Stop at the {}-bar {}, target at {}R",
                window.len(),
                if bias == Bias::Bullish { "low" } else { "high" },
                reward_ratio.normalize()
            ),
        }
    }

    /// Reward-to-risk ratio of the plan, if it has levels.
    pub fn risk_reward(&self) -> Option<Decimal> {
        let (entry, stop, target) = (self.entry?, self.stop_loss?, self.take_profit?);
        let risk = entry.checked_sub(stop)?.abs();
        if risk.is_zero() {
            return None;
        }
        target.checked_sub(entry)?.abs().checked_div(risk)
    }

    /// Fixed-format summary lines.
    pub fn summary(&self) -> String {
        let level = |price: Option<Decimal>| match price {
            Some(p) => p.to_string(),
            None => "manual review".to_string(),
        };

        let mut s = String::new();
        s.push_str(&format!("- Bias: {}\n", self.bias));
        s.push_str(&format!("- Entry: {}\n", level(self.entry)));
        s.push_str(&format!("- Stop-Loss: {}\n", level(self.stop_loss)));
        s.push_str(&format!("- Take-Profit: {}\n", level(self.take_profit)));
        s.push_str(&format!("- Notes: {}\n", self.notes));
        s
    }
}

fn to_price(value: f64, decimals: u32) -> Option<Decimal> {
    Decimal::try_from(value)
        .ok()
        .map(|d| d.round_dp(decimals).normalize())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate};
    use rust_decimal_macros::dec;
    use signal_core::types::PriceBar;

    fn series(closes: &[f64]) -> PriceSeries {
        let start = NaiveDate::from_ymd_opt(2024, 3, 15)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let bars = closes
            .iter()
            .enumerate()
            .map(|(i, &c)| PriceBar::new(start + Duration::hours(i as i64), c))
            .collect();
        PriceSeries::new("EURUSD", "H1", bars)
    }

    #[test]
    fn test_bullish_plan() {
        let plan = TradePlan::derive(Some(&series(&[1.10, 1.12, 1.15])), 20, dec!(2), 5);
        assert_eq!(plan.bias, Bias::Bullish);
        assert_eq!(plan.entry, Some(dec!(1.15)));
        assert_eq!(plan.stop_loss, Some(dec!(1.10)));
        assert_eq!(plan.take_profit, Some(dec!(1.25)));
        assert_eq!(plan.risk_reward(), Some(dec!(2)));
    }

    #[test]
    fn test_bearish_plan() {
        let plan = TradePlan::derive(Some(&series(&[1.20, 1.15, 1.10])), 20, dec!(1.5), 5);
        assert_eq!(plan.bias, Bias::Bearish);
        assert_eq!(plan.entry, Some(dec!(1.10)));
        assert_eq!(plan.stop_loss, Some(dec!(1.20)));
        assert_eq!(plan.take_profit, Some(dec!(0.95)));
    }

    #[test]
    fn test_unclear_trend_is_manual() {
        let plan = TradePlan::derive(Some(&series(&[1.10, 1.15, 1.12])), 20, dec!(2), 5);
        assert_eq!(plan.bias, Bias::Neutral);
        assert!(plan.entry.is_none());
        assert!(plan.risk_reward().is_none());
    }

    #[test]
    fn test_no_data_is_manual() {
        let plan = TradePlan::derive(None, 20, dec!(2), 5);
        assert_eq!(plan.bias, Bias::Neutral);
        assert!(plan.notes.contains("No price data"));

        let plan = TradePlan::derive(Some(&series(&[1.10])), 20, dec!(2), 5);
        assert!(plan.notes.contains("Insufficient price data"));
    }

    #[test]
    fn test_extreme_prices_fall_back_to_manual() {
        let plan = TradePlan::derive(Some(&series(&[1e28, 3e28, 5e28])), 20, dec!(2), 5);
        assert_eq!(plan.bias, Bias::Neutral);
        assert!(plan.entry.is_none());
        assert!(plan.notes.contains("could not be represented"));

        let plan = TradePlan::derive(Some(&series(&[5e28, 3e28, 1e28])), 20, dec!(2), 5);
        assert!(plan.take_profit.is_none());
    }

    #[test]
    fn test_risk_reward_does_not_overflow() {
        let plan = TradePlan {
            bias: Bias::Bullish,
            entry: Some(Decimal::MAX),
            stop_loss: Some(Decimal::MIN),
            take_profit: Some(Decimal::MAX),
            notes: String::new(),
        };
        assert!(plan.risk_reward().is_none());
    }

    #[test]
    fn test_summary_format() {
        let plan = TradePlan::derive(Some(&series(&[1.10, 1.12, 1.15])), 20, dec!(2), 5);
        let summary = plan.summary();
        assert!(summary.starts_with("- Bias: Bullish\n- Entry: 1.15\n"));
        assert!(summary.contains("- Stop-Loss: 1.1\n"));
        assert!(summary.contains("- Take-Profit: 1.25\n"));

        let manual = TradePlan::manual("check chart").summary();
        assert!(manual.contains("- Entry: manual review\n"));
        assert!(manual.ends_with("- Notes: check chart\n"));
    }
}
