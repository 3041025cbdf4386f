//! Checklist trait definitions.

use crate::types::{ChecklistResult, ParsedSignal, PriceSeries};

/// A named rule set evaluated against a parsed signal.
///
/// Implementations must be pure: the same signal and data always yield the
/// same result, and a checklist never fails. Missing or short data degrades
/// to negative criteria instead of an error.
pub trait Checklist: Send + Sync {
    /// Registry key, e.g. `structure`.
    fn key(&self) -> &str;

    /// Display name used as the report section header.
    fn name(&self) -> &str;

    /// Evaluate the checklist.
    ///
    /// # Arguments
    /// * `signal` - The parsed signal
    /// * `data` - Price history for the signal's instrument and timeframe,
    ///   if any is available
    fn evaluate(&self, signal: &ParsedSignal, data: Option<&PriceSeries>) -> ChecklistResult;

    /// Get a description of the checklist.
    fn description(&self) -> &str {
        ""
    }
}
