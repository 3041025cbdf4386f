//! Logging and diagnostics.

mod logging;

pub use logging::{setup_logging, WorkerGuard};
