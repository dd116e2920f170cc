use super::ui;
use crate::core::{self, ConversionError, RateTable};
use crate::store::{self, RateStore};
use anyhow::{Context, Result};
use tracing::debug;

/// What the output region shows after a conversion attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Converted(String),
    Invalid(String),
}

impl Outcome {
    pub fn render(&self) -> String {
        match self {
            Outcome::Converted(message) => ui::style_text(message, ui::StyleType::Success),
            Outcome::Invalid(message) => ui::style_text(message, ui::StyleType::Error),
        }
    }
}

/// Converts and turns the result into a user-facing message. Unknown codes
/// and overflowing results produce [`Outcome::Invalid`] rather than an error.
pub fn conversion_outcome(amount: f64, from: &str, to: &str, rates: &RateTable) -> Outcome {
    match core::convert(amount, from, to, rates) {
        Ok(converted) => Outcome::Converted(ui::success_message(amount, from, converted, to)),
        Err(ConversionError::InvalidCurrency(code)) => {
            debug!("Rejected conversion, unknown currency {code}");
            Outcome::Invalid(ui::INVALID_SELECTION.to_string())
        }
        Err(err @ ConversionError::OutOfRange { .. }) => {
            debug!("Rejected conversion: {err}");
            Outcome::Invalid(ui::AMOUNT_OUT_OF_RANGE.to_string())
        }
    }
}

/// Normalizes a currency code as typed by the user.
pub fn normalize_code(input: &str) -> String {
    input.trim().to_uppercase()
}

/// clap value parser for amounts: finite and not negative.
pub fn parse_amount(input: &str) -> Result<f64, String> {
    let amount: f64 = input
        .trim()
        .parse()
        .map_err(|_| format!("'{input}' is not a number"))?;
    if !amount.is_finite() {
        return Err(format!("'{input}' is not a finite amount"));
    }
    if amount < 0.0 {
        return Err("amount must be zero or greater".to_string());
    }
    // "-0" parses as negative zero, which would print as -0.00.
    if amount == 0.0 {
        return Ok(0.0);
    }
    Ok(amount)
}

pub fn run(store: &dyn RateStore, from: &str, to: &str, amount: f64) -> Result<()> {
    let rates = store::initialize_and_load(store).context("Failed to load exchange rates")?;
    let outcome = conversion_outcome(amount, &normalize_code(from), &normalize_code(to), &rates);
    println!("{}", outcome.render());
    Ok(())
}
