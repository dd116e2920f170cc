//! Core business logic abstractions

pub mod config;
pub mod convert;
pub mod log;
pub mod rates;

// Re-export main types for cleaner imports
pub use convert::{ConversionError, convert};
pub use rates::{BASE_CURRENCY, RateEntry, RateTable};
