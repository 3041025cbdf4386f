//! Checklist registry for building engines from configuration.

use serde::{Deserialize, Serialize};
use signal_core::{error::ChecklistError, traits::Checklist};

use crate::{
    ChecklistEngine, ChecklistSettings, MacroContextChecklist, OrderFlowChecklist,
    SignalQualityChecklist, StructureChecklist,
};

/// Information about a registered checklist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistInfo {
    /// Registry key
    pub key: String,
    /// Checklist name
    pub name: String,
    /// Checklist description
    pub description: String,
}

/// Registry of built-in checklists, in default run order.
pub struct ChecklistRegistry {
    checklists: Vec<ChecklistInfo>,
}

impl ChecklistRegistry {
    /// Create a registry with all built-in checklists.
    pub fn new() -> Self {
        let settings = ChecklistSettings::default();
        let checklists = Self::KEYS
            .iter()
            .filter_map(|key| Self::instantiate(key, &settings))
            .map(|checklist| ChecklistInfo {
                key: checklist.key().to_string(),
                name: checklist.name().to_string(),
                description: checklist.description().to_string(),
            })
            .collect();

        Self { checklists }
    }

    /// Built-in keys in default run order.
    pub const KEYS: [&'static str; 4] = ["structure", "signal_quality", "macro", "order_flow"];

    fn instantiate(key: &str, settings: &ChecklistSettings) -> Option<Box<dyn Checklist>> {
        let checklist: Box<dyn Checklist> = match key {
            "structure" => Box::new(StructureChecklist::new(settings.clone())),
            "signal_quality" => Box::new(SignalQualityChecklist::new(settings.clone())),
            "macro" => Box::new(MacroContextChecklist::new()),
            "order_flow" => Box::new(OrderFlowChecklist::new(settings.clone())),
            _ => return None,
        };
        Some(checklist)
    }

    /// List all available checklists in default order.
    pub fn list(&self) -> &[ChecklistInfo] {
        &self.checklists
    }

    /// Get checklist info by key.
    pub fn get(&self, key: &str) -> Option<&ChecklistInfo> {
        self.checklists.iter().find(|c| c.key == key)
    }

    /// Check if a checklist exists.
    pub fn exists(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Create a checklist instance.
    pub fn create(
        &self,
        key: &str,
        settings: &ChecklistSettings,
    ) -> Result<Box<dyn Checklist>, ChecklistError> {
        settings.validate()?;
        Self::instantiate(key, settings).ok_or_else(|| ChecklistError::NotFound(key.to_string()))
    }

    /// Build an engine running `keys` in the given order.
    pub fn build_engine<S: AsRef<str>>(
        &self,
        keys: &[S],
        settings: &ChecklistSettings,
    ) -> Result<ChecklistEngine, ChecklistError> {
        let mut engine = ChecklistEngine::new();
        for key in keys {
            engine.register(self.create(key.as_ref(), settings)?);
        }
        Ok(engine)
    }

    /// Build an engine with every built-in checklist.
    pub fn default_engine(&self, settings: &ChecklistSettings) -> Result<ChecklistEngine, ChecklistError> {
        self.build_engine(&Self::KEYS, settings)
    }
}

impl Default for ChecklistRegistry {
    fn default() -> Self {
        Self::new()
    }
}
