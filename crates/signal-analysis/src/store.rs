//! Report persistence.

use signal_core::error::PersistenceError;
use std::fs::{self, File, OpenOptions};
use std::io::{self, ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::report::Report;

/// Token used when the raw signal has no usable first word.
const DEFAULT_TOKEN: &str = "signal";

/// Suffixes tried before giving up on a name collision.
const MAX_ATTEMPTS: usize = 1000;

/// Writes rendered reports into a directory, one new file per report.
///
/// Existing files are never overwritten: a name collision gets a numeric
/// suffix instead.
#[derive(Debug, Clone)]
pub struct ReportStore {
    root: PathBuf,
}

impl ReportStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// `report_{token}_{YYYYMMDD_HHMMSS}.txt`, with `_{attempt}` before the
    /// extension for retries.
    pub fn file_name(report: &Report, attempt: usize) -> String {
        let stamp = report.generated_at.format("%Y%m%d_%H%M%S");
        let token = signal_token(&report.raw_signal);
        if attempt == 0 {
            format!("report_{}_{}.txt", token, stamp)
        } else {
            format!("report_{}_{}_{}.txt", token, stamp, attempt)
        }
    }

    /// Write the rendered report and return its path.
    ///
    /// The directory must already exist. A failed write leaves no file behind.
    pub fn persist(&self, report: &Report) -> Result<PathBuf, PersistenceError> {
        if !self.root.is_dir() {
            return Err(PersistenceError::MissingDirectory(self.root.clone()));
        }

        let contents = report.render();

        for attempt in 0..MAX_ATTEMPTS {
            let path = self.root.join(Self::file_name(report, attempt));
            let file = match OpenOptions::new().write(true).create_new(true).open(&path) {
                Ok(file) => file,
                Err(e) if e.kind() == ErrorKind::AlreadyExists => continue,
                Err(source) => return Err(PersistenceError::Write { path, source }),
            };

            write_or_remove(&path, file, |file| {
                file.write_all(contents.as_bytes())?;
                file.sync_all()
            })?;

            info!(path = %path.display(), report_id = %report.id, "Report saved");
            return Ok(path);
        }

        Err(PersistenceError::Exhausted {
            attempts: MAX_ATTEMPTS,
        })
    }
}

/// Run `write` on a freshly created file, deleting the file if it fails.
fn write_or_remove(
    path: &Path,
    mut file: File,
    write: impl FnOnce(&mut File) -> io::Result<()>,
) -> Result<(), PersistenceError> {
    if let Err(source) = write(&mut file) {
        drop(file);
        // Best effort; the write error is what gets reported
        let _ = fs::remove_file(path);
        return Err(PersistenceError::Write {
            path: path.to_path_buf(),
            source,
        });
    }
    Ok(())
}

/// First whitespace-delimited word of `raw`, reduced to `[A-Za-z0-9._-]`.
pub fn signal_token(raw: &str) -> String {
    let token: String = raw
        .split_whitespace()
        .next()
        .unwrap_or_default()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_'))
        .collect();

    if token.is_empty() {
        DEFAULT_TOKEN.to_string()
    } else {
        token
    }
}
