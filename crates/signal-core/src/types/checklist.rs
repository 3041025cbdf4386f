//! Checklist verdicts and results.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Verdict text for criteria the system cannot derive on its own.
pub const MANUAL_REVIEW: &str = "MANUAL REVIEW";

/// Outcome of a single checklist criterion.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum Verdict {
    Pass,
    Fail,
    /// Non-boolean outcome, rendered verbatim.
    Other(String),
}

impl Verdict {
    /// Verdict for criteria that need a human decision.
    pub fn manual() -> Self {
        Verdict::Other(MANUAL_REVIEW.to_string())
    }

    /// `Some(bool)` for pass/fail verdicts.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Verdict::Pass => Some(true),
            Verdict::Fail => Some(false),
            Verdict::Other(_) => None,
        }
    }

    /// Glyph for boolean verdicts, literal text otherwise.
    pub fn label(&self) -> &str {
        match self {
            Verdict::Pass => "✅",
            Verdict::Fail => "❌",
            Verdict::Other(text) => text,
        }
    }
}

impl From<bool> for Verdict {
    fn from(value: bool) -> Self {
        if value {
            Verdict::Pass
        } else {
            Verdict::Fail
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One evaluated checklist line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Criterion {
    /// Question being answered
    pub criterion: String,
    /// Outcome
    pub verdict: Verdict,
    /// Why the verdict was reached
    pub justification: String,
}

impl Criterion {
    pub fn new(
        criterion: impl Into<String>,
        verdict: impl Into<Verdict>,
        justification: impl Into<String>,
    ) -> Self {
        Self {
            criterion: criterion.into(),
            verdict: verdict.into(),
            justification: justification.into(),
        }
    }
}

/// Ordered criteria produced by one checklist.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChecklistResult {
    criteria: Vec<Criterion>,
}

impl ChecklistResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Single negative criterion for checklists that cannot run on the
    /// available data.
    pub fn insufficient_data(criterion: impl Into<String>, detail: impl fmt::Display) -> Self {
        let mut result = Self::new();
        result.push(
            criterion,
            Verdict::Fail,
            format!("Insufficient data for analysis: {}", detail),
        );
        result
    }

    /// Append a criterion.
    pub fn push(
        &mut self,
        criterion: impl Into<String>,
        verdict: impl Into<Verdict>,
        justification: impl Into<String>,
    ) {
        self.criteria
            .push(Criterion::new(criterion, verdict, justification));
    }

    /// Append a criterion that requires a human decision.
    pub fn push_manual(&mut self, criterion: impl Into<String>, reason: impl fmt::Display) {
        self.push(
            criterion,
            Verdict::manual(),
            format!("Manual review required: {}", reason),
        );
    }

    pub fn criteria(&self) -> &[Criterion] {
        &self.criteria
    }

    pub fn len(&self) -> usize {
        self.criteria.len()
    }

    pub fn is_empty(&self) -> bool {
        self.criteria.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Criterion> {
        self.criteria.iter()
    }

    /// Find a criterion by its question text.
    pub fn get(&self, criterion: &str) -> Option<&Criterion> {
        self.criteria.iter().find(|c| c.criterion == criterion)
    }

    /// Number of passing criteria.
    pub fn passed(&self) -> usize {
        self.criteria
            .iter()
            .filter(|c| c.verdict == Verdict::Pass)
            .count()
    }
}

impl<'a> IntoIterator for &'a ChecklistResult {
    type Item = &'a Criterion;
    type IntoIter = std::slice::Iter<'a, Criterion>;

    fn into_iter(self) -> Self::IntoIter {
        self.criteria.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verdict_labels() {
        assert_eq!(Verdict::Pass.label(), "✅");
        assert_eq!(Verdict::Fail.label(), "❌");
        assert_eq!(Verdict::Other("Bullish".into()).label(), "Bullish");
        assert_eq!(Verdict::manual().to_string(), MANUAL_REVIEW);
    }

    #[test]
    fn test_verdict_from_bool() {
        assert_eq!(Verdict::from(true), Verdict::Pass);
        assert_eq!(Verdict::from(false).as_bool(), Some(false));
        assert_eq!(Verdict::manual().as_bool(), None);
    }

    #[test]
    fn test_result_preserves_order() {
        let mut result = ChecklistResult::new();
        result.push("first", true, "a");
        result.push_manual("second", "no data source");
        result.push("third", false, "c");

        let names: Vec<_> = result.iter().map(|c| c.criterion.as_str()).collect();
        assert_eq!(names, vec!["first", "second", "third"]);
        assert_eq!(result.passed(), 1);
        assert!(result
            .get("second")
            .unwrap()
            .justification
            .starts_with("Manual review required"));
    }

    #[test]
    fn test_insufficient_data() {
        let result = ChecklistResult::insufficient_data("Trend direction clear?", "1 close available");
        assert_eq!(result.len(), 1);
        let only = &result.criteria()[0];
        assert_eq!(only.verdict, Verdict::Fail);
        assert!(only.justification.contains("Insufficient data"));
    }

    #[test]
    fn test_verdict_serde() {
        let json = serde_json::to_string(&Verdict::Other("n/a".into())).unwrap();
        assert_eq!(json, r#"{"kind":"other","value":"n/a"}"#);
        let pass = serde_json::to_string(&Verdict::Pass).unwrap();
        assert_eq!(pass, r#"{"kind":"pass"}"#);
    }
}
