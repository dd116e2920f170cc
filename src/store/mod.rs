pub mod disk;
pub mod memory;

use crate::core::RateTable;
use std::path::PathBuf;
use thiserror::Error;

pub use disk::DiskRateStore;
pub use memory::MemoryRateStore;

/// Failure to reach the rate table. Every variant means no rates can be shown.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("rate storage unavailable: could not open {}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: fjall::Error,
    },
    #[error("rate storage unavailable: backend operation failed")]
    Backend(#[from] fjall::Error),
    #[error("rate storage unavailable: entry for {code} is unreadable")]
    Corrupt {
        code: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("rate storage unavailable: rate {rate} for {code} is not positive")]
    InvalidRate { code: String, rate: f64 },
    #[error("rate storage unavailable: {0}")]
    Unavailable(String),
}

/// Rejects stored rates that would break conversion: zero, negative or not finite.
pub(crate) fn check_rate(code: &str, rate: f64) -> Result<(), StorageError> {
    if rate.is_finite() && rate > 0.0 {
        Ok(())
    } else {
        Err(StorageError::InvalidRate {
            code: code.to_string(),
            rate,
        })
    }
}

/// Durable home of the exchange rate table.
pub trait RateStore {
    /// Creates the table if needed and seeds it when it holds no entries.
    /// Existing entries are never touched.
    fn ensure_initialized(&self) -> Result<(), StorageError>;

    /// Reads every stored entry.
    fn load_all(&self) -> Result<RateTable, StorageError>;
}

/// Runs one render cycle's worth of store access: initialize, then load.
/// A table that is still empty afterwards counts as unavailable.
pub fn initialize_and_load(store: &dyn RateStore) -> Result<RateTable, StorageError> {
    store.ensure_initialized()?;
    let rates = store.load_all()?;
    if rates.is_empty() {
        return Err(StorageError::Unavailable(
            "rate table is empty after initialization".to_string(),
        ));
    }
    Ok(rates)
}
