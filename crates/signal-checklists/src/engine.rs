//! Checklist engine.

use serde::{Deserialize, Serialize};
use signal_core::traits::Checklist;
use signal_core::types::{ChecklistResult, ParsedSignal, PriceSeries};
use tracing::debug;

/// Output of one checklist, tagged with its key and display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedResult {
    /// Registry key
    pub key: String,
    /// Section header
    pub name: String,
    /// Evaluated criteria
    pub result: ChecklistResult,
}

/// Runs registered checklists in registration order.
#[derive(Default)]
pub struct ChecklistEngine {
    checklists: Vec<Box<dyn Checklist>>,
}

impl ChecklistEngine {
    /// Create an engine with no checklists.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a checklist; it runs after those already registered.
    pub fn register(&mut self, checklist: Box<dyn Checklist>) {
        self.checklists.push(checklist);
    }

    /// Builder-style [`register`](Self::register).
    pub fn with(mut self, checklist: impl Checklist + 'static) -> Self {
        self.register(Box::new(checklist));
        self
    }

    pub fn len(&self) -> usize {
        self.checklists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checklists.is_empty()
    }

    /// Display names in run order.
    pub fn names(&self) -> Vec<&str> {
        self.checklists.iter().map(|c| c.name()).collect()
    }

    /// Evaluate every checklist against the same inputs.
    ///
    /// Checklists are independent: none sees another's output.
    pub fn run(&self, signal: &ParsedSignal, data: Option<&PriceSeries>) -> Vec<NamedResult> {
        self.checklists
            .iter()
            .map(|checklist| {
                let result = checklist.evaluate(signal, data);
                debug!(
                    checklist = checklist.key(),
                    criteria = result.len(),
                    passed = result.passed(),
                    "Checklist evaluated"
                );
                NamedResult {
                    key: checklist.key().to_string(),
                    name: checklist.name().to_string(),
                    result,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{closes, signal};
    use crate::{MacroContextChecklist, StructureChecklist};

    struct Fixed(&'static str);

    impl Checklist for Fixed {
        fn key(&self) -> &str {
            self.0
        }

        fn name(&self) -> &str {
            self.0
        }

        fn evaluate(&self, _signal: &ParsedSignal, _data: Option<&PriceSeries>) -> ChecklistResult {
            let mut result = ChecklistResult::new();
            result.push(self.0, true, "fixed");
            result
        }
    }

    #[test]
    fn test_runs_in_registration_order() {
        let engine = ChecklistEngine::new()
            .with(Fixed("zeta"))
            .with(Fixed("alpha"))
            .with(Fixed("mid"));

        let results = engine.run(&signal(""), None);
        let keys: Vec<_> = results.iter().map(|r| r.key.as_str()).collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
        assert_eq!(engine.names(), vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_deterministic() {
        let engine = ChecklistEngine::new()
            .with(StructureChecklist::default())
            .with(MacroContextChecklist::new());
        let s = signal("breakout trap");
        let data = closes(&[1.10, 1.12, 1.15]);

        let first = engine.run(&s, Some(&data));
        let second = engine.run(&s, Some(&data));
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn test_empty_engine() {
        let engine = ChecklistEngine::new();
        assert!(engine.is_empty());
        assert!(engine.run(&signal(""), None).is_empty());
    }
}
