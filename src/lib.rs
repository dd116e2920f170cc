pub mod cli;
pub mod core;
pub mod store;

use crate::core::config::{AppConfig, StorageKind};
use crate::store::{DiskRateStore, MemoryRateStore, RateStore};
use anyhow::{Context, Result};
use tracing::{debug, info};

/// What the user asked the converter to do.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    /// The interactive converter page.
    Form,
    /// Convert once and print the result.
    Convert { from: String, to: String, amount: f64 },
    /// Print the stored rate table.
    Rates,
}

/// Opens the configured rate store once and runs `command` against it.
pub fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<()> {
    info!("Currency converter starting...");

    let config = match config_path {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");

    let store = open_store(&config)?;

    match command {
        AppCommand::Form => {
            let stdin = std::io::stdin();
            let mut term = console::Term::stdout();
            cli::form::run(store.as_ref(), &mut stdin.lock(), &mut term)
        }
        AppCommand::Convert { from, to, amount } => {
            cli::convert::run(store.as_ref(), &from, &to, amount)
        }
        AppCommand::Rates => cli::rates::run(store.as_ref()),
    }
}

fn open_store(config: &AppConfig) -> Result<Box<dyn RateStore>> {
    match config.storage {
        StorageKind::Disk => {
            let data_path = config.data_path()?;
            let store = DiskRateStore::open(&data_path)
                .context("Failed to open exchange rate storage")?;
            debug!("Using rate storage at {}", store.path().display());
            Ok(Box::new(store))
        }
        StorageKind::Memory => {
            debug!("Using in-memory rate storage");
            Ok(Box::new(MemoryRateStore::new()))
        }
    }
}
