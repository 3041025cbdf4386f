//! Report composition and rendering.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use signal_checklists::NamedResult;
use signal_core::types::{ParsedSignal, Verdict};
use uuid::Uuid;

use crate::plan::TradePlan;

const BANNER: &str = "═══════════════════════════════════════════════════════════\n";

/// Layout of [`Report::generated_at`] in rendered text.
pub const GENERATED_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Complete analysis report.
///
/// Built once per analysis and never updated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Unique report id
    pub id: Uuid,
    /// Message exactly as received
    pub raw_signal: String,
    /// Parsed form of the message, when available
    pub signal: Option<ParsedSignal>,
    /// When the report was generated
    pub generated_at: NaiveDateTime,
    /// Checklist outputs in run order
    pub checklists: Vec<NamedResult>,
    /// Suggested trade plan
    pub trade_plan: TradePlan,
}

impl Report {
    /// Assemble a report.
    pub fn compose(
        raw_signal: impl Into<String>,
        generated_at: NaiveDateTime,
        checklists: Vec<NamedResult>,
        trade_plan: TradePlan,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            raw_signal: raw_signal.into(),
            signal: None,
            generated_at,
            checklists,
            trade_plan,
        }
    }

    /// Attach the parsed signal.
    pub fn with_signal(mut self, signal: ParsedSignal) -> Self {
        self.signal = Some(signal);
        self
    }

    /// Render the plain-text report.
    pub fn render(&self) -> String {
        let mut s = String::new();

        s.push_str(BANNER);
        s.push_str("                  SIGNAL ANALYSIS REPORT                   \n");
        s.push_str(BANNER);
        s.push('\n');

        s.push_str(&format!("Signal: {}\n", self.raw_signal.trim()));
        if let Some(signal) = &self.signal {
            s.push_str(&format!(
                "Parsed: {} ({} timestamp)\n",
                signal, signal.timestamp_source
            ));
        }
        s.push_str(&format!(
            "Generated: {}\n",
            self.generated_at.format(GENERATED_FORMAT)
        ));
        s.push('\n');

        for section in &self.checklists {
            s.push_str(&section.name);
            s.push('\n');
            for criterion in &section.result {
                s.push_str(&format!(
                    "- {}: {}\n",
                    criterion.criterion,
                    criterion.verdict.label()
                ));
            }
            s.push('\n');
        }

        s.push_str("Trade Plan\n");
        s.push_str(&self.trade_plan.summary());

        s
    }

    /// Structured form for display layers.
    pub fn view(&self) -> ReportView {
        ReportView {
            id: self.id.to_string(),
            raw_signal: self.raw_signal.clone(),
            signal: self.signal.clone(),
            generated_at: self.generated_at.format(GENERATED_FORMAT).to_string(),
            sections: self
                .checklists
                .iter()
                .map(|section| SectionView {
                    key: section.key.clone(),
                    name: section.name.clone(),
                    passed: section.result.passed(),
                    total: section.result.len(),
                    criteria: section
                        .result
                        .iter()
                        .map(|c| CriterionView {
                            criterion: c.criterion.clone(),
                            label: c.verdict.label().to_string(),
                            verdict: c.verdict.clone(),
                            justification: c.justification.clone(),
                        })
                        .collect(),
                })
                .collect(),
            trade_plan: self.trade_plan.clone(),
        }
    }

    /// Export the structured view to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.view())
    }
}

/// Report as handed to a display layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportView {
    pub id: String,
    pub raw_signal: String,
    pub signal: Option<ParsedSignal>,
    pub generated_at: String,
    pub sections: Vec<SectionView>,
    pub trade_plan: TradePlan,
}

/// One checklist section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionView {
    pub key: String,
    pub name: String,
    pub passed: usize,
    pub total: usize,
    pub criteria: Vec<CriterionView>,
}

/// One criterion line with its rendered label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CriterionView {
    pub criterion: String,
    pub verdict: Verdict,
    pub label: String,
    pub justification: String,
}
