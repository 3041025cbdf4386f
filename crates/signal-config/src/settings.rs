//! Configuration structures.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use signal_analysis::AnalysisSettings;
use signal_checklists::{ChecklistRegistry, ChecklistSettings};
use signal_core::error::{ChecklistError, DeskError};
use std::path::PathBuf;

/// Main application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub app: AppSettings,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub storage: StorageSettings,
    #[serde(default)]
    pub checklists: ChecklistsConfig,
    #[serde(default)]
    pub analysis: AnalysisSettings,
}

impl AppConfig {
    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), DeskError> {
        self.checklists.settings.validate()?;

        if self.checklists.enabled.is_empty() {
            return Err(DeskError::Config(
                "At least one checklist must be enabled".into(),
            ));
        }
        let registry = ChecklistRegistry::new();
        for (i, key) in self.checklists.enabled.iter().enumerate() {
            if !registry.exists(key) {
                return Err(ChecklistError::NotFound(key.clone()).into());
            }
            if self.checklists.enabled[..i].contains(key) {
                return Err(DeskError::Config(format!(
                    "Checklist '{}' is enabled more than once",
                    key
                )));
            }
        }

        if self.analysis.plan_lookback < 3 {
            return Err(DeskError::Config(
                "Trade plan lookback must be at least 3 bars".into(),
            ));
        }
        if self.analysis.reward_ratio <= Decimal::ZERO {
            return Err(DeskError::Config("Reward ratio must be positive".into()));
        }
        if self.analysis.price_decimals > 10 {
            return Err(DeskError::Config(
                "Price decimals must be at most 10".into(),
            ));
        }

        match self.logging.format.as_str() {
            "pretty" | "json" => Ok(()),
            other => Err(DeskError::Config(format!(
                "Unknown log format '{}', expected 'pretty' or 'json'",
                other
            ))),
        }
    }
}

/// General app settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    pub name: String,
    pub environment: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            name: "signal-desk".to_string(),
            environment: "development".to_string(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
            file: None,
        }
    }
}

/// Where market data is read from and reports are written to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageSettings {
    pub data_dir: PathBuf,
    pub reports_dir: PathBuf,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            reports_dir: PathBuf::from("reports"),
        }
    }
}

impl StorageSettings {
    /// Create the data and report directories if they are missing.
    ///
    /// Safe to call repeatedly.
    pub fn provision(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(&self.data_dir)?;
        std::fs::create_dir_all(&self.reports_dir)?;
        Ok(())
    }
}

/// Which checklists run, in order, and how they are tuned.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChecklistsConfig {
    /// Checklist keys in run order
    #[serde(default = "default_enabled")]
    pub enabled: Vec<String>,
    #[serde(flatten)]
    pub settings: ChecklistSettings,
}

fn default_enabled() -> Vec<String> {
    ChecklistRegistry::KEYS.iter().map(|k| k.to_string()).collect()
}

impl Default for ChecklistsConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            settings: ChecklistSettings::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::load_config;
    use rust_decimal_macros::dec;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_are_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.checklists.enabled.len(), 4);
        assert_eq!(config.storage.reports_dir, PathBuf::from("reports"));
    }

    #[test]
    fn test_load_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("desk.toml");
        fs::write(
            &path,
            r#"
[app]
name = "desk-test"
environment = "test"

[storage]
data_dir = "csv"
reports_dir = "out"

[checklists]
enabled = ["macro", "structure"]
lookback = 10

[analysis]
reward_ratio = 3
"#,
        )
        .unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.app.name, "desk-test");
        assert_eq!(config.storage.data_dir, PathBuf::from("csv"));
        assert_eq!(config.checklists.enabled, vec!["macro", "structure"]);
        assert_eq!(config.checklists.settings.lookback, 10);
        assert_eq!(config.checklists.settings.chop_threshold, 0.5);
        assert_eq!(config.analysis.reward_ratio, dec!(3));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_section_keeps_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("desk.toml");
        fs::write(&path, "[checklists]\nchop_threshold = 0.3\n").unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.checklists.enabled.len(), 4);
        assert_eq!(config.checklists.settings.chop_threshold, 0.3);
        assert_eq!(config.checklists.settings.lookback, 20);
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let config = load_config(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config.app.name, "signal-desk");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_unknown_checklist_rejected() {
        let mut config = AppConfig::default();
        config.checklists.enabled.push("astrology".into());
        assert!(matches!(
            config.validate(),
            Err(DeskError::Checklist(ChecklistError::NotFound(_)))
        ));
    }

    #[test]
    fn test_duplicate_checklist_rejected() {
        let mut config = AppConfig::default();
        config.checklists.enabled = vec!["structure".into(), "macro".into(), "structure".into()];
        let err = config.validate().unwrap_err();
        assert!(matches!(err, DeskError::Config(_)));
        assert!(err.to_string().contains("structure"));
    }

    #[test]
    fn test_invalid_values_rejected() {
        let mut config = AppConfig::default();
        config.checklists.enabled.clear();
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.analysis.reward_ratio = Decimal::ZERO;
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.logging.format = "xml".into();
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.checklists.settings.lookback = 1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_provision_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let storage = StorageSettings {
            data_dir: dir.path().join("data"),
            reports_dir: dir.path().join("nested/reports"),
        };
        storage.provision().unwrap();
        storage.provision().unwrap();
        assert!(storage.data_dir.is_dir());
        assert!(storage.reports_dir.is_dir());
    }
}
