//! Exchange rate types shared by the stores and the conversion engine.

use std::collections::HashMap;

/// Currency every stored rate is expressed in.
pub const BASE_CURRENCY: &str = "INR";

/// Rates written into an empty store, as INR per one unit of the currency.
pub const SEED_RATES: &[(&str, f64)] = &[
    ("USD", 83.2),
    ("EUR", 90.5),
    ("GBP", 105.3),
    ("JPY", 0.56),
    ("INR", 1.0),
];

/// One stored row: a currency code and its value in the base currency.
#[derive(Debug, Clone, PartialEq)]
pub struct RateEntry {
    pub currency_code: String,
    pub rate_to_base: f64,
}

impl RateEntry {
    pub fn new(currency_code: impl Into<String>, rate_to_base: f64) -> Self {
        Self {
            currency_code: currency_code.into(),
            rate_to_base,
        }
    }

    /// Seed entries in their declared order.
    pub fn seed() -> Vec<RateEntry> {
        SEED_RATES
            .iter()
            .map(|(code, rate)| RateEntry::new(*code, *rate))
            .collect()
    }
}

/// Read-only snapshot of every stored rate, in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RateTable {
    entries: Vec<(String, f64)>,
    positions: HashMap<String, usize>,
}

impl RateTable {
    pub fn get(&self, currency_code: &str) -> Option<f64> {
        self.positions
            .get(currency_code)
            .map(|&position| self.entries[position].1)
    }

    /// Currency codes in table order.
    pub fn codes(&self) -> Vec<&str> {
        self.entries.iter().map(|(code, _)| code.as_str()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(code, rate)| (code.as_str(), *rate))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    // A repeated code keeps its first position and takes the later rate.
    fn insert(&mut self, currency_code: String, rate_to_base: f64) {
        match self.positions.get(&currency_code) {
            Some(&position) => self.entries[position].1 = rate_to_base,
            None => {
                self.positions
                    .insert(currency_code.clone(), self.entries.len());
                self.entries.push((currency_code, rate_to_base));
            }
        }
    }
}

impl FromIterator<RateEntry> for RateTable {
    fn from_iter<I: IntoIterator<Item = RateEntry>>(iter: I) -> Self {
        let mut table = RateTable::default();
        for entry in iter {
            table.insert(entry.currency_code, entry.rate_to_base);
        }
        table
    }
}

impl FromIterator<(&'static str, f64)> for RateTable {
    fn from_iter<I: IntoIterator<Item = (&'static str, f64)>>(iter: I) -> Self {
        iter.into_iter()
            .map(|(code, rate)| RateEntry::new(code, rate))
            .collect()
    }
}
