use super::{RateStore, StorageError, check_rate};
use crate::core::{RateEntry, RateTable};
use std::cell::RefCell;
use tracing::{debug, info};

/// Rate table kept in process memory. Nothing outlives the store.
pub struct MemoryRateStore {
    // `None` until the table has been created.
    table: RefCell<Option<Vec<RateEntry>>>,
    unavailable: Option<String>,
}

impl MemoryRateStore {
    pub fn new() -> Self {
        Self {
            table: RefCell::new(None),
            unavailable: None,
        }
    }

    /// A store whose table already holds `entries`.
    pub fn with_entries(entries: impl IntoIterator<Item = RateEntry>) -> Self {
        let table = entries.into_iter().collect();
        Self {
            table: RefCell::new(Some(table)),
            unavailable: None,
        }
    }

    /// A store that fails every operation with `reason`.
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self {
            table: RefCell::new(None),
            unavailable: Some(reason.into()),
        }
    }

    fn check_available(&self) -> Result<(), StorageError> {
        match &self.unavailable {
            Some(reason) => Err(StorageError::Unavailable(reason.clone())),
            None => Ok(()),
        }
    }
}

impl Default for MemoryRateStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RateStore for MemoryRateStore {
    fn ensure_initialized(&self) -> Result<(), StorageError> {
        self.check_available()?;
        let mut guard = self.table.borrow_mut();
        let table = guard.get_or_insert_with(Vec::new);
        if table.is_empty() {
            table.extend(RateEntry::seed());
            info!("Seeded in-memory rate table with {} currencies", table.len());
        }
        Ok(())
    }

    fn load_all(&self) -> Result<RateTable, StorageError> {
        self.check_available()?;
        let guard = self.table.borrow();
        let entries = guard.as_deref().unwrap_or_default();
        for entry in entries {
            check_rate(&entry.currency_code, entry.rate_to_base)?;
        }
        let table: RateTable = entries.iter().cloned().collect();
        debug!("Loaded {} rates from memory", table.len());
        Ok(table)
    }
}
