//! Market data source trait definitions.

use crate::error::DataError;
use crate::types::PriceSeries;

/// Trait for historical price lookups.
pub trait MarketDataSource: Send + Sync {
    /// Load the price series for an instrument and timeframe.
    ///
    /// # Returns
    /// * `Ok(Some(series))` with bars ordered from oldest to newest
    /// * `Ok(None)` when no data exists for the pair
    /// * `Err(DataError)` when data exists but is unreadable or malformed
    fn load(&self, instrument: &str, timeframe: &str) -> Result<Option<PriceSeries>, DataError>;

    /// Get the data source name.
    fn name(&self) -> &str;
}
