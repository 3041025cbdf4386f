//! Checklist evaluators for parsed trade signals.
//!
//! This crate provides the built-in checklists:
//! - Price Action Structure
//! - Price Action Signal Quality
//! - Macro / Fundamental Context
//! - Institutional Order Flow
//!
//! plus the registry and engine that run them in a fixed order.

mod direction;
mod engine;
mod macro_context;
mod order_flow;
mod registry;
mod settings;
mod signal_quality;
mod structure;
mod trend;

pub use direction::SignalDirection;
pub use engine::{ChecklistEngine, NamedResult};
pub use macro_context::MacroContextChecklist;
pub use order_flow::OrderFlowChecklist;
pub use registry::{ChecklistInfo, ChecklistRegistry};
pub use settings::ChecklistSettings;
pub use signal_quality::SignalQualityChecklist;
pub use structure::StructureChecklist;
pub use trend::{mean, pct_distance, Trend};

#[cfg(test)]
pub(crate) mod test_support;
