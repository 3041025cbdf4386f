//! Market data sources for checklist evaluation.

mod csv_source;

pub use csv_source::CsvMarketData;

use signal_core::error::DataError;
use signal_core::types::PriceSeries;
use std::path::Path;

/// Load a price series from a single CSV file.
///
/// Returns `Ok(None)` if the file does not exist.
pub fn load_csv(
    path: &Path,
    instrument: &str,
    timeframe: &str,
) -> Result<Option<PriceSeries>, DataError> {
    csv_source::read_series(path, instrument, timeframe)
}
