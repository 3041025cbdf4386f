//! Analysis pipeline and report composition.

mod engine;
mod plan;
mod report;
mod store;

pub use engine::{AnalysisSettings, Analyzer};
pub use plan::{Bias, TradePlan};
pub use report::{CriterionView, Report, ReportView, SectionView};
pub use store::{signal_token, ReportStore};
