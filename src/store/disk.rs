use super::{RateStore, StorageError, check_rate};
use crate::core::{RateEntry, RateTable};
use fjall::{Keyspace, PartitionCreateOptions, PartitionHandle, PersistMode};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

const RATES_PARTITION: &str = "exchange_rates";

// Keys sort by code, so `seq` carries the insertion order.
#[derive(Serialize, Deserialize)]
struct StoredRate {
    rate_to_base: f64,
    #[serde(default)]
    seq: u64,
}

/// Rate table persisted in a fjall keyspace, one key per currency code.
pub struct DiskRateStore {
    keyspace: Keyspace,
    path: PathBuf,
}

impl fmt::Debug for DiskRateStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DiskRateStore")
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

impl DiskRateStore {
    /// Opens (or creates) the keyspace under `data_path`.
    pub fn open(data_path: &Path) -> Result<Self, StorageError> {
        let path = data_path.join("rates");
        debug!("Opening rate storage at {}", path.display());
        let keyspace = fjall::Config::new(&path)
            .open()
            .map_err(|source| StorageError::Open {
                path: path.clone(),
                source,
            })?;
        Ok(Self { keyspace, path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn partition(&self) -> Result<PartitionHandle, StorageError> {
        Ok(self
            .keyspace
            .open_partition(RATES_PARTITION, PartitionCreateOptions::default())?)
    }
}

impl RateStore for DiskRateStore {
    fn ensure_initialized(&self) -> Result<(), StorageError> {
        let partition = self.partition()?;
        if !partition.is_empty()? {
            debug!("Rate table already populated");
            return Ok(());
        }

        let seed = RateEntry::seed();
        let mut batch = self.keyspace.batch();
        for (seq, entry) in (0u64..).zip(&seed) {
            let value = serde_json::to_vec(&StoredRate {
                rate_to_base: entry.rate_to_base,
                seq,
            })
            .map_err(|source| StorageError::Corrupt {
                code: entry.currency_code.clone(),
                source,
            })?;
            batch.insert(&partition, entry.currency_code.as_bytes(), value);
        }
        batch.commit()?;
        self.keyspace.persist(PersistMode::SyncAll)?;
        info!("Seeded rate table with {} currencies", seed.len());
        Ok(())
    }

    fn load_all(&self) -> Result<RateTable, StorageError> {
        let partition = self.partition()?;
        let mut entries = Vec::new();
        for item in partition.iter() {
            let (key, value) = item?;
            let code = String::from_utf8_lossy(&key).into_owned();
            let stored: StoredRate =
                serde_json::from_slice(&value).map_err(|source| StorageError::Corrupt {
                    code: code.clone(),
                    source,
                })?;
            check_rate(&code, stored.rate_to_base)?;
            entries.push((stored.seq, RateEntry::new(code, stored.rate_to_base)));
        }
        // Stable sort: equal sequence numbers stay in key order.
        entries.sort_by_key(|(seq, _)| *seq);
        debug!("Loaded {} rates", entries.len());
        Ok(entries.into_iter().map(|(_, entry)| entry).collect())
    }
}
