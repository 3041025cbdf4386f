//! Price Action Structure checklist.
//!
//! Judges whether recent closes form a readable trend with clean swings.
//! Only raw closes are used; there are no indicators.

use signal_core::traits::Checklist;
use signal_core::types::{ChecklistResult, ParsedSignal, PriceSeries};

use crate::settings::ChecklistSettings;
use crate::trend::Trend;

pub const TREND_CLEAR: &str = "Trend direction clear?";
pub const CLEAN_STRUCTURE: &str = "Clean structure (no chop)?";
pub const KEY_LEVELS: &str = "Key levels respected?";
pub const PATTERN_VALID: &str = "Price action pattern valid?";
pub const RAW_PRICE: &str = "No indicators needed (raw price)?";

/// Price Action Structure checklist.
#[derive(Debug, Clone)]
pub struct StructureChecklist {
    settings: ChecklistSettings,
}

impl StructureChecklist {
    pub fn new(settings: ChecklistSettings) -> Self {
        Self { settings }
    }

    /// Count direction flips between consecutive close-to-close moves.
    ///
    /// Flat moves are skipped. Returns `(flips, moves)`.
    fn direction_flips(closes: &[f64]) -> (usize, usize) {
        let signs: Vec<bool> = closes
            .windows(2)
            .filter(|w| w[1] != w[0])
            .map(|w| w[1] > w[0])
            .collect();
        let flips = signs.windows(2).filter(|w| w[0] != w[1]).count();
        (flips, signs.len())
    }
}

impl Default for StructureChecklist {
    fn default() -> Self {
        Self::new(ChecklistSettings::default())
    }
}

impl Checklist for StructureChecklist {
    fn key(&self) -> &str {
        "structure"
    }

    fn name(&self) -> &str {
        "Price Action Structure"
    }

    fn description(&self) -> &str {
        "Trend clarity and swing quality from raw closes"
    }

    fn evaluate(&self, signal: &ParsedSignal, data: Option<&PriceSeries>) -> ChecklistResult {
        let Some(series) = data else {
            return ChecklistResult::insufficient_data(
                TREND_CLEAR,
                format!("no price data for {} {}", signal.instrument, signal.timeframe),
            );
        };

        let closes = series.last_closes(self.settings.lookback);
        let Some((trend, last_three)) = Trend::of_last_three(&closes) else {
            return ChecklistResult::insufficient_data(
                TREND_CLEAR,
                format!(
                    "need {} closes, have {}",
                    Trend::REQUIRED_CLOSES,
                    closes.len()
                ),
            );
        };

        let mut result = ChecklistResult::new();

        result.push(
            TREND_CLEAR,
            trend.is_clear(),
            format!(
                "Last 3 closes: {:?} {}",
                last_three.to_vec(),
                match trend {
                    Trend::Unclear => "show no clear trend".to_string(),
                    clear => format!("indicate {}", clear),
                }
            ),
        );

        let (flips, moves) = Self::direction_flips(&closes);
        let chop = if moves > 1 {
            flips as f64 / (moves - 1) as f64
        } else {
            0.0
        };
        result.push(
            CLEAN_STRUCTURE,
            chop <= self.settings.chop_threshold,
            format!(
                "{} direction changes across {} moves in the last {} closes ({:.0}% vs {:.0}% limit)",
                flips,
                moves,
                closes.len(),
                chop * 100.0,
                self.settings.chop_threshold * 100.0
            ),
        );

        result.push_manual(KEY_LEVELS, "swing high/low reactions must be checked on the chart");

        if signal.description.is_empty() {
            result.push_manual(PATTERN_VALID, "no pattern described in the signal");
        } else {
            result.push_manual(
                PATTERN_VALID,
                format!("confirm \"{}\" on the chart", signal.description),
            );
        }

        result.push(
            RAW_PRICE,
            true,
            "Computed criteria in this checklist use raw closes only",
        );

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{closes, signal};
    use signal_core::types::{Verdict, MANUAL_REVIEW};

    #[test]
    fn test_uptrend_cites_closes_in_order() {
        let checklist = StructureChecklist::default();
        let result = checklist.evaluate(&signal(""), Some(&closes(&[1.10, 1.12, 1.15])));

        let trend = result.get(TREND_CLEAR).unwrap();
        assert_eq!(trend.verdict, Verdict::Pass);
        assert_eq!(
            trend.justification,
            "Last 3 closes: [1.1, 1.12, 1.15] indicate uptrend"
        );
        assert_eq!(result.len(), 5);
    }

    #[test]
    fn test_downtrend_is_clear() {
        let checklist = StructureChecklist::default();
        let result = checklist.evaluate(&signal(""), Some(&closes(&[1.15, 1.12, 1.10])));
        let trend = result.get(TREND_CLEAR).unwrap();
        assert_eq!(trend.verdict, Verdict::Pass);
        assert!(trend.justification.ends_with("indicate downtrend"));
    }

    #[test]
    fn test_sideways_is_not_clear() {
        let checklist = StructureChecklist::default();
        let result = checklist.evaluate(&signal(""), Some(&closes(&[1.10, 1.15, 1.12])));
        let trend = result.get(TREND_CLEAR).unwrap();
        assert_eq!(trend.verdict, Verdict::Fail);
        assert!(trend.justification.contains("no clear trend"));
    }

    #[test]
    fn test_insufficient_closes() {
        let checklist = StructureChecklist::default();
        let result = checklist.evaluate(&signal(""), Some(&closes(&[1.10])));

        assert_eq!(result.len(), 1);
        let only = &result.criteria()[0];
        assert_eq!(only.criterion, TREND_CLEAR);
        assert_eq!(only.verdict, Verdict::Fail);
        assert!(only.justification.starts_with("Insufficient data"));
    }

    #[test]
    fn test_no_data() {
        let checklist = StructureChecklist::default();
        let result = checklist.evaluate(&signal(""), None);
        assert_eq!(result.len(), 1);
        assert!(result.criteria()[0].justification.contains("no price data for EURUSD H1"));
    }

    #[test]
    fn test_chop_detection() {
        let checklist = StructureChecklist::default();

        let choppy = closes(&[1.0, 1.2, 1.0, 1.2, 1.0, 1.2]);
        let result = checklist.evaluate(&signal(""), Some(&choppy));
        assert_eq!(result.get(CLEAN_STRUCTURE).unwrap().verdict, Verdict::Fail);

        let clean = closes(&[1.0, 1.1, 1.2, 1.15, 1.3, 1.4]);
        let result = checklist.evaluate(&signal(""), Some(&clean));
        assert_eq!(result.get(CLEAN_STRUCTURE).unwrap().verdict, Verdict::Pass);
    }

    #[test]
    fn test_direction_flips_skip_flat_moves() {
        assert_eq!(StructureChecklist::direction_flips(&[1.0, 1.0, 1.1, 1.1, 1.2]), (0, 2));
        assert_eq!(StructureChecklist::direction_flips(&[1.0, 1.1, 1.0]), (1, 2));
    }

    #[test]
    fn test_manual_criteria_are_flagged() {
        let checklist = StructureChecklist::default();
        let result = checklist.evaluate(
            &signal("breakout trap"),
            Some(&closes(&[1.10, 1.12, 1.15])),
        );

        let pattern = result.get(PATTERN_VALID).unwrap();
        assert_eq!(pattern.verdict, Verdict::Other(MANUAL_REVIEW.into()));
        assert!(pattern.justification.contains("breakout trap"));
        assert_eq!(
            result.get(KEY_LEVELS).unwrap().verdict,
            Verdict::Other(MANUAL_REVIEW.into())
        );
    }

    #[test]
    fn test_lookback_limits_window() {
        let checklist = StructureChecklist::new(ChecklistSettings {
            lookback: 3,
            ..Default::default()
        });
        // Older bars are outside the window
        let series = closes(&[5.0, 1.0, 5.0, 1.10, 1.12, 1.15]);
        let result = checklist.evaluate(&signal(""), Some(&series));
        let clean = result.get(CLEAN_STRUCTURE).unwrap();
        assert_eq!(clean.verdict, Verdict::Pass);
        assert!(clean.justification.contains("last 3 closes"));
    }
}
