//! Core types and traits for signal analysis.
//!
//! This crate provides the foundational building blocks including:
//! - The parsed trade-signal record
//! - Price bars and series used by checklist evaluators
//! - Checklist verdicts and results
//! - Core traits for checklists, market data sources, and clocks

pub mod types;
pub mod traits;
pub mod error;

pub use error::{DeskError, DeskResult};
pub use types::*;
pub use traits::*;
