//! Two-hop currency conversion through the base currency.

use crate::core::rates::RateTable;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    #[error("invalid currency: {0}")]
    InvalidCurrency(String),
    #[error("converting {from} to {to} does not fit in a finite amount")]
    OutOfRange { from: String, to: String },
}

/// Converts `amount` of `from` into `to` by way of the base currency.
///
/// `amount` is expected to be non-negative; callers validate it before
/// getting here. Either code missing from `rates` yields
/// [`ConversionError::InvalidCurrency`] naming the first missing code; a
/// result too large for `f64` yields [`ConversionError::OutOfRange`].
pub fn convert(
    amount: f64,
    from: &str,
    to: &str,
    rates: &RateTable,
) -> Result<f64, ConversionError> {
    let from_rate = rates
        .get(from)
        .ok_or_else(|| ConversionError::InvalidCurrency(from.to_string()))?;
    let to_rate = rates
        .get(to)
        .ok_or_else(|| ConversionError::InvalidCurrency(to.to_string()))?;

    let amount_in_base = amount * from_rate;
    let converted = amount_in_base / to_rate;
    if !converted.is_finite() {
        return Err(ConversionError::OutOfRange {
            from: from.to_string(),
            to: to.to_string(),
        });
    }
    Ok(converted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rates::SEED_RATES;

    const EPSILON: f64 = 1e-9;

    fn seed_table() -> RateTable {
        SEED_RATES.iter().copied().collect()
    }

    #[test]
    fn test_usd_to_eur() {
        let result = convert(100.0, "USD", "EUR", &seed_table()).unwrap();
        assert!((result - 100.0 * 83.2 / 90.5).abs() < EPSILON);
        assert_eq!(format!("{result:.2}"), "91.93");
    }

    #[test]
    fn test_inr_to_jpy() {
        let result = convert(50.0, "INR", "JPY", &seed_table()).unwrap();
        assert_eq!(format!("{result:.2}"), "89.29");
    }

    #[test]
    fn test_zero_amount() {
        let result = convert(0.0, "GBP", "USD", &seed_table()).unwrap();
        assert_eq!(format!("{result:.2}"), "0.00");
    }

    #[test]
    fn test_unknown_source_currency() {
        let result = convert(10.0, "XYZ", "USD", &seed_table());
        assert_eq!(result, Err(ConversionError::InvalidCurrency("XYZ".to_string())));
    }

    #[test]
    fn test_unknown_target_currency() {
        let result = convert(10.0, "USD", "ABC", &seed_table());
        assert_eq!(result, Err(ConversionError::InvalidCurrency("ABC".to_string())));
    }

    #[test]
    fn test_overflowing_result_is_out_of_range() {
        let result = convert(1e308, "USD", "INR", &seed_table());
        assert_eq!(
            result,
            Err(ConversionError::OutOfRange {
                from: "USD".to_string(),
                to: "INR".to_string(),
            })
        );
        // Large but representable amounts still convert.
        assert!(convert(1e300, "USD", "INR", &seed_table()).is_ok());
    }

    #[test]
    fn test_empty_table_rejects_everything() {
        let result = convert(1.0, "INR", "INR", &RateTable::default());
        assert!(matches!(result, Err(ConversionError::InvalidCurrency(code)) if code == "INR"));
    }

    #[test]
    fn test_same_currency_is_identity() {
        let table = seed_table();
        for (code, _) in SEED_RATES {
            for amount in [0.0, 0.1, 1.0, 42.5, 1_000_000.0] {
                let result = convert(amount, code, code, &table).unwrap();
                assert!(
                    (result - amount).abs() <= EPSILON * amount.max(1.0),
                    "{amount} {code} converted to {result}"
                );
            }
        }
    }

    #[test]
    fn test_matches_direct_cross_rate() {
        let table = seed_table();
        for (from, from_rate) in SEED_RATES {
            for (to, to_rate) in SEED_RATES {
                let result = convert(250.0, from, to, &table).unwrap();
                let expected = 250.0 * from_rate / to_rate;
                assert!((result - expected).abs() <= EPSILON * expected.max(1.0));
            }
        }
    }

    #[test]
    fn test_round_trip_returns_original_amount() {
        let table = seed_table();
        for (a, _) in SEED_RATES {
            for (b, _) in SEED_RATES {
                let there = convert(123.45, a, b, &table).unwrap();
                let back = convert(there, b, a, &table).unwrap();
                assert!((back - 123.45).abs() < 1e-6, "{a} -> {b} -> {a} gave {back}");
            }
        }
    }
}
