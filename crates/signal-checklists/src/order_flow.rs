//! Institutional Order Flow checklist.
//!
//! Uses volume and bar extremes as a proxy for participation; anything
//! needing depth-of-market or footprint data is left for manual review.

use signal_core::traits::Checklist;
use signal_core::types::{ChecklistResult, ParsedSignal, PriceBar, PriceSeries};

use crate::settings::ChecklistSettings;
use crate::trend::mean;

pub const VOLUME_CONFIRMS: &str = "Volume confirms move?";
pub const LIQUIDITY_SWEEP: &str = "Liquidity sweep before entry?";
pub const ORDER_BLOCK: &str = "Order block / imbalance identified?";

const MIN_BARS: usize = 3;

/// Institutional Order Flow checklist.
#[derive(Debug, Clone)]
pub struct OrderFlowChecklist {
    settings: ChecklistSettings,
}

impl OrderFlowChecklist {
    pub fn new(settings: ChecklistSettings) -> Self {
        Self { settings }
    }

    /// Latest bar pierced the prior range and closed back inside it.
    fn sweep(latest: &PriceBar, prior: &[PriceBar]) -> Option<String> {
        let prior_low = prior.iter().filter_map(|b| b.low).fold(f64::INFINITY, f64::min);
        let prior_high = prior
            .iter()
            .filter_map(|b| b.high)
            .fold(f64::NEG_INFINITY, f64::max);

        match (latest.low, latest.high) {
            (Some(low), _) if low < prior_low && latest.close > prior_low => Some(format!(
                "Sell-side sweep: low {} below {}-bar low {}, closed back above at {}",
                low,
                prior.len(),
                prior_low,
                latest.close
            )),
            (_, Some(high)) if high > prior_high && latest.close < prior_high => Some(format!(
                "Buy-side sweep: high {} above {}-bar high {}, closed back below at {}",
                high,
                prior.len(),
                prior_high,
                latest.close
            )),
            _ => None,
        }
    }
}

impl Default for OrderFlowChecklist {
    fn default() -> Self {
        Self::new(ChecklistSettings::default())
    }
}

impl Checklist for OrderFlowChecklist {
    fn key(&self) -> &str {
        "order_flow"
    }

    fn name(&self) -> &str {
        "Institutional Order Flow"
    }

    fn description(&self) -> &str {
        "Volume participation and liquidity sweeps around the signal bar"
    }

    fn evaluate(&self, signal: &ParsedSignal, data: Option<&PriceSeries>) -> ChecklistResult {
        let Some(series) = data else {
            return ChecklistResult::insufficient_data(
                VOLUME_CONFIRMS,
                format!("no price data for {} {}", signal.instrument, signal.timeframe),
            );
        };

        let window = series.tail(self.settings.lookback);
        if window.len() < MIN_BARS {
            return ChecklistResult::insufficient_data(
                VOLUME_CONFIRMS,
                format!("need {} bars, have {}", MIN_BARS, window.len()),
            );
        }
        let Some(volumes) = series.last_volumes(window.len()) else {
            return ChecklistResult::insufficient_data(
                VOLUME_CONFIRMS,
                "volume column missing or incomplete",
            );
        };

        let mut result = ChecklistResult::new();

        let (last_volume, prior_volumes) = match volumes.split_last() {
            Some((last, prior)) => (*last, prior),
            None => return result,
        };
        let average = mean(prior_volumes).unwrap_or(0.0);
        result.push(
            VOLUME_CONFIRMS,
            last_volume > average,
            format!(
                "Last volume {} vs {}-bar average {:.2}",
                last_volume,
                prior_volumes.len(),
                average
            ),
        );

        let (latest, prior) = match window.split_last() {
            Some(split) => split,
            None => return result,
        };
        let has_range = window.iter().all(|b| b.high.is_some() && b.low.is_some());
        if has_range {
            match Self::sweep(latest, prior) {
                Some(detail) => result.push(LIQUIDITY_SWEEP, true, detail),
                None => result.push(
                    LIQUIDITY_SWEEP,
                    false,
                    "Latest bar did not take out and reclaim the prior range",
                ),
            }
        } else {
            result.push_manual(LIQUIDITY_SWEEP, "high/low columns missing");
        }

        result.push_manual(ORDER_BLOCK, "requires footprint or depth-of-market data");

        result
    }
}
