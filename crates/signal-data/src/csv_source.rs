//! CSV market data source.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use csv::{ReaderBuilder, StringRecord, Trim};
use serde::Deserialize;
use signal_core::error::DataError;
use signal_core::traits::MarketDataSource;
use signal_core::types::{PriceBar, PriceSeries};
use std::fs::File;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

/// CSV record format.
///
/// Field names and aliases are lowercase; headers are lowercased before
/// deserializing.
#[derive(Debug, Deserialize)]
struct CsvRecord {
    #[serde(alias = "date", alias = "timestamp", alias = "datetime")]
    time: String,
    #[serde(default)]
    open: Option<f64>,
    #[serde(default)]
    high: Option<f64>,
    #[serde(default)]
    low: Option<f64>,
    close: f64,
    #[serde(alias = "tick_volume", default)]
    volume: Option<f64>,
}

/// Adjusted-close headers used as `close` when no plain close column exists.
const ADJ_CLOSE_HEADERS: [&str; 3] = ["adj close", "adj_close", "adjclose"];

/// Date-time layouts accepted in the time column.
const DATETIME_FORMATS: [&str; 7] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y.%m.%d %H:%M:%S",
    "%Y.%m.%d %H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%Y/%m/%d %H:%M",
];

/// Date-only layouts accepted in the time column.
const DATE_FORMATS: [&str; 4] = ["%Y-%m-%d", "%Y.%m.%d", "%Y/%m/%d", "%m/%d/%Y"];

/// Price history stored as `{INSTRUMENT}_{TIMEFRAME}.csv` files in one
/// directory.
#[derive(Debug, Clone)]
pub struct CsvMarketData {
    data_dir: PathBuf,
}

impl CsvMarketData {
    /// Create a source rooted at `data_dir`.
    ///
    /// The directory does not need to exist; lookups then report no data.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Path of the file holding an (instrument, timeframe) series.
    pub fn file_path(&self, instrument: &str, timeframe: &str) -> PathBuf {
        self.data_dir.join(format!(
            "{}_{}.csv",
            file_token(instrument),
            file_token(timeframe)
        ))
    }
}

impl MarketDataSource for CsvMarketData {
    fn load(&self, instrument: &str, timeframe: &str) -> Result<Option<PriceSeries>, DataError> {
        let path = self.file_path(instrument, timeframe);
        read_series(&path, instrument, timeframe)
    }

    fn name(&self) -> &str {
        "csv"
    }
}

/// Keep file names inside the data directory.
fn file_token(s: &str) -> String {
    s.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect()
}

pub(crate) fn read_series(
    path: &Path,
    instrument: &str,
    timeframe: &str,
) -> Result<Option<PriceSeries>, DataError> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!(path = %path.display(), "No market data file");
            return Ok(None);
        }
        Err(source) => {
            return Err(DataError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(file);

    let headers = reader.headers().map_err(|e| DataError::Format {
        path: path.to_path_buf(),
        row: 0,
        message: format!("Unreadable header: {}", e),
    })?;
    let headers = normalize_headers(headers);
    reader.set_headers(headers);

    let mut bars = Vec::new();

    for (index, result) in reader.deserialize::<CsvRecord>().enumerate() {
        let row = index + 1;
        let format_error = |message: String| DataError::Format {
            path: path.to_path_buf(),
            row,
            message,
        };

        let record = result.map_err(|e| format_error(e.to_string()))?;
        let time = parse_timestamp(&record.time).ok_or_else(|| {
            format_error(format!("Could not parse time: {}", record.time))
        })?;
        if !record.close.is_finite() {
            return Err(format_error(format!("Close is not finite: {}", record.close)));
        }

        bars.push(PriceBar {
            time,
            open: record.open,
            high: record.high,
            low: record.low,
            close: record.close,
            volume: record.volume,
        });
    }

    debug!(path = %path.display(), bars = bars.len(), "Loaded market data");

    // Sorted chronologically by the series constructor
    Ok(Some(PriceSeries::new(instrument, timeframe, bars)))
}

/// Lowercase header names and map an adjusted close onto `close`.
fn normalize_headers(headers: &StringRecord) -> StringRecord {
    let lower: Vec<String> = headers.iter().map(|h| h.trim().to_lowercase()).collect();
    let has_close = lower.iter().any(|h| h == "close");

    lower
        .into_iter()
        .map(|h| {
            if !has_close && ADJ_CLOSE_HEADERS.contains(&h.as_str()) {
                "close".to_string()
            } else {
                h
            }
        })
        .collect()
}

/// Parse the supported timestamp layouts.
fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    for format in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, format) {
            return Some(dt);
        }
    }
    for format in DATE_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(s, format) {
            return d.and_hms_opt(0, 0, 0);
        }
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_utc());
    }

    // Unix timestamp; assume milliseconds if > 10 digits
    let ts = s.parse::<i64>().ok()?;
    let dt = if ts > 10_000_000_000 {
        DateTime::from_timestamp_millis(ts)
    } else {
        DateTime::from_timestamp(ts, 0)
    };
    dt.map(|dt| dt.naive_utc())
}
