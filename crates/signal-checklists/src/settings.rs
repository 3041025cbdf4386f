//! Checklist tuning parameters.

use serde::{Deserialize, Serialize};
use signal_core::error::ChecklistError;

/// Parameters shared by the built-in checklists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChecklistSettings {
    /// Number of recent bars examined by window-based criteria
    pub lookback: usize,
    /// Maximum share of direction flips (0..=1) still counted as clean structure
    pub chop_threshold: f64,
    /// Distance from a level, in percent, that counts as testing it
    pub level_tolerance_pct: f64,
}

impl Default for ChecklistSettings {
    fn default() -> Self {
        Self {
            lookback: 20,
            chop_threshold: 0.5,
            level_tolerance_pct: 0.25,
        }
    }
}

impl ChecklistSettings {
    /// Validate the settings.
    pub fn validate(&self) -> Result<(), ChecklistError> {
        if self.lookback < 3 {
            return Err(ChecklistError::InvalidSettings(
                "Lookback must be at least 3 bars".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.chop_threshold) {
            return Err(ChecklistError::InvalidSettings(
                "Chop threshold must be between 0 and 1".into(),
            ));
        }
        if !self.level_tolerance_pct.is_finite() || self.level_tolerance_pct < 0.0 {
            return Err(ChecklistError::InvalidSettings(
                "Level tolerance must be a non-negative percentage".into(),
            ));
        }
        Ok(())
    }
}
