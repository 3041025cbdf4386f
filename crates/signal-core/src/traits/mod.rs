//! Core traits for signal analysis.

mod checklist;
mod clock;
mod data_source;

pub use checklist::Checklist;
pub use clock::{Clock, FixedClock, SystemClock};
pub use data_source::MarketDataSource;
