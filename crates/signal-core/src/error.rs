//! Error types for signal analysis.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level signal analysis error.
#[derive(Error, Debug)]
pub enum DeskError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("Data error: {0}")]
    Data(#[from] DataError),

    #[error("Checklist error: {0}")]
    Checklist(#[from] ChecklistError),

    #[error("Persistence error: {0}")]
    Persistence(#[from] PersistenceError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Signal parsing errors.
///
/// Both variants mean the message lacks enough structure to analyze; neither
/// is fatal to the session.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Signal text is empty")]
    Empty,

    #[error("Insufficient structure: need instrument and timeframe, found {found} token(s)")]
    InsufficientStructure { found: usize },
}

/// Market data errors.
///
/// A missing data file is not an error; these cover data that exists but
/// cannot be read or trusted.
#[derive(Error, Debug)]
pub enum DataError {
    #[error("Malformed market data in {} at row {row}: {message}", path.display())]
    Format {
        path: PathBuf,
        row: usize,
        message: String,
    },

    #[error("Failed to read market data {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Checklist registry errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChecklistError {
    #[error("Checklist not found: {0}")]
    NotFound(String),

    #[error("Invalid checklist settings: {0}")]
    InvalidSettings(String),
}

/// Report persistence errors.
#[derive(Error, Debug)]
pub enum PersistenceError {
    #[error("Report directory does not exist: {}", .0.display())]
    MissingDirectory(PathBuf),

    #[error("Failed to write report {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not allocate a unique report name after {attempts} attempts")]
    Exhausted { attempts: usize },
}

/// Result type alias for signal analysis operations.
pub type DeskResult<T> = Result<T, DeskError>;
