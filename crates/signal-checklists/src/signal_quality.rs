//! Price Action Signal Quality checklist.
//!
//! Compares the signal against the prevailing bias and nearby levels.

use signal_core::traits::Checklist;
use signal_core::types::{ChecklistResult, ParsedSignal, PriceSeries, Verdict};

use crate::direction::SignalDirection;
use crate::settings::ChecklistSettings;
use crate::trend::{mean, pct_distance};

pub const BIAS_ALIGNED: &str = "Trend bias aligned?";
pub const LEVEL_TESTED: &str = "Support/resistance tested?";
pub const SIGNAL_OBVIOUS: &str = "Price action signal obvious?";
pub const RISK_REWARD: &str = "Risk/reward favourable?";

/// Minimum bars: two prior bars to form a level plus the latest bar.
const MIN_BARS: usize = 3;

/// Price Action Signal Quality checklist.
#[derive(Debug, Clone)]
pub struct SignalQualityChecklist {
    settings: ChecklistSettings,
}

impl SignalQualityChecklist {
    pub fn new(settings: ChecklistSettings) -> Self {
        Self { settings }
    }

    fn bias_criterion(&self, signal: &ParsedSignal, closes: &[f64], result: &mut ChecklistResult) {
        let (Some(avg), Some(&last)) = (mean(closes), closes.last()) else {
            return;
        };

        let bias = if last > avg {
            Some(SignalDirection::Long)
        } else if last < avg {
            Some(SignalDirection::Short)
        } else {
            None
        };
        let context = format!(
            "Last close {} vs {}-bar mean {:.5}",
            last,
            closes.len(),
            avg
        );

        match (SignalDirection::from_description(&signal.description), bias) {
            (_, None) => result.push(
                BIAS_ALIGNED,
                Verdict::Fail,
                format!("{}: no directional bias", context),
            ),
            (Some(wanted), Some(bias)) => result.push(
                BIAS_ALIGNED,
                wanted == bias,
                format!("{}: {} bias, signal is {}", context, bias, wanted),
            ),
            (None, Some(bias)) => result.push(
                BIAS_ALIGNED,
                Verdict::Other(format!("{} bias", bias)),
                format!(
                    "{}; signal states no direction, compare manually",
                    context
                ),
            ),
        }
    }

    fn level_criterion(&self, series: &PriceSeries, result: &mut ChecklistResult) {
        let window = series.tail(self.settings.lookback);
        let Some((latest, prior)) = window.split_last() else {
            return;
        };

        let support = prior
            .iter()
            .map(|b| b.low_or_close())
            .fold(f64::INFINITY, f64::min);
        let resistance = prior
            .iter()
            .map(|b| b.high_or_close())
            .fold(f64::NEG_INFINITY, f64::max);

        let tolerance = self.settings.level_tolerance_pct;
        let to_support = pct_distance(latest.low_or_close(), support);
        let to_resistance = pct_distance(latest.high_or_close(), resistance);

        let justification = if to_support <= tolerance {
            format!(
                "Latest low {} within {:.3}% of {}-bar support {}",
                latest.low_or_close(),
                to_support,
                prior.len(),
                support
            )
        } else if to_resistance <= tolerance {
            format!(
                "Latest high {} within {:.3}% of {}-bar resistance {}",
                latest.high_or_close(),
                to_resistance,
                prior.len(),
                resistance
            )
        } else {
            format!(
                "Latest bar is {:.3}% from support {} and {:.3}% from resistance {} (tolerance {}%)",
                to_support, support, to_resistance, resistance, tolerance
            )
        };

        result.push(
            LEVEL_TESTED,
            to_support <= tolerance || to_resistance <= tolerance,
            justification,
        );
    }
}

impl Default for SignalQualityChecklist {
    fn default() -> Self {
        Self::new(ChecklistSettings::default())
    }
}

impl Checklist for SignalQualityChecklist {
    fn key(&self) -> &str {
        "signal_quality"
    }

    fn name(&self) -> &str {
        "Price Action Signal Quality"
    }

    fn description(&self) -> &str {
        "Bias alignment and level interaction of the latest bar"
    }

    fn evaluate(&self, signal: &ParsedSignal, data: Option<&PriceSeries>) -> ChecklistResult {
        let Some(series) = data else {
            return ChecklistResult::insufficient_data(
                BIAS_ALIGNED,
                format!("no price data for {} {}", signal.instrument, signal.timeframe),
            );
        };

        let closes = series.last_closes(self.settings.lookback);
        if closes.len() < MIN_BARS {
            return ChecklistResult::insufficient_data(
                BIAS_ALIGNED,
                format!("need {} bars, have {}", MIN_BARS, closes.len()),
            );
        }

        let mut result = ChecklistResult::new();
        self.bias_criterion(signal, &closes, &mut result);
        self.level_criterion(series, &mut result);
        result.push_manual(SIGNAL_OBVIOUS, "candle pattern clarity is a visual judgement");
        result.push_manual(
            RISK_REWARD,
            "depends on the trader's own entry, stop and target; see the trade plan",
        );
        result
    }
}
