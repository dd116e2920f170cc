//! Interactive converter page.
//!
//! Every cycle reloads the rate table, asks for the two currencies and an
//! amount, and converts only once the user confirms. Input and output are
//! generic so the page can be driven by a script.

use super::convert::{conversion_outcome, normalize_code, parse_amount};
use super::ui;
use crate::core::RateTable;
use crate::store::{self, RateStore};
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use tracing::debug;

struct Selection {
    from: String,
    to: String,
    amount: f64,
}

pub fn run<R: BufRead, W: Write>(
    store: &dyn RateStore,
    input: &mut R,
    output: &mut W,
) -> Result<()> {
    writeln!(output, "{}", ui::style_text(ui::TITLE, ui::StyleType::Title))?;
    writeln!(output, "{}", ui::SUBTITLE)?;

    loop {
        let rates = store::initialize_and_load(store).context("Failed to load exchange rates")?;
        writeln!(output)?;
        render_choices(&rates, output)?;

        let Some(selection) = collect_selection(&rates, input, output)? else {
            break;
        };

        match prompt(input, output, "Press Enter to convert, or q to quit: ")? {
            Some(answer) if !answer.eq_ignore_ascii_case("q") => {}
            _ => break,
        }

        debug!(
            from = %selection.from,
            to = %selection.to,
            amount = selection.amount,
            "Converting"
        );
        let outcome = conversion_outcome(selection.amount, &selection.from, &selection.to, &rates);
        writeln!(output, "{}", outcome.render())?;
    }

    writeln!(output, "\n{}", ui::separator())?;
    writeln!(output, "{}", ui::style_text(ui::CAPTION, ui::StyleType::Subtle))?;
    Ok(())
}

fn render_choices<W: Write>(rates: &RateTable, output: &mut W) -> Result<()> {
    let choices = rates
        .codes()
        .iter()
        .enumerate()
        .map(|(i, code)| format!("{}) {code}", i + 1))
        .collect::<Vec<_>>()
        .join("  ");
    writeln!(
        output,
        "{} {choices}",
        ui::style_text("Currencies:", ui::StyleType::Label)
    )?;
    Ok(())
}

/// Returns `None` once input runs out.
fn collect_selection<R: BufRead, W: Write>(
    rates: &RateTable,
    input: &mut R,
    output: &mut W,
) -> Result<Option<Selection>> {
    let Some(from) = select_currency(rates, input, output, "Convert from: ")? else {
        return Ok(None);
    };
    let Some(to) = select_currency(rates, input, output, "Convert to: ")? else {
        return Ok(None);
    };
    let Some(amount) = read_amount(input, output)? else {
        return Ok(None);
    };
    Ok(Some(Selection { from, to, amount }))
}

/// Accepts a list position or a currency code. An empty answer picks the
/// first listed currency.
fn select_currency<R: BufRead, W: Write>(
    rates: &RateTable,
    input: &mut R,
    output: &mut W,
    label: &str,
) -> Result<Option<String>> {
    let Some(answer) = prompt(input, output, label)? else {
        return Ok(None);
    };
    let codes = rates.codes();

    if answer.is_empty() {
        return Ok(codes.first().map(|code| code.to_string()));
    }
    if let Ok(position) = answer.parse::<usize>() {
        if let Some(code) = position.checked_sub(1).and_then(|i| codes.get(i)) {
            return Ok(Some(code.to_string()));
        }
    }
    Ok(Some(normalize_code(&answer)))
}

/// Re-prompts until the amount is a non-negative number. Empty means zero.
fn read_amount<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<Option<f64>> {
    loop {
        let Some(answer) = prompt(input, output, "Enter amount: ")? else {
            return Ok(None);
        };
        if answer.is_empty() {
            return Ok(Some(0.0));
        }
        match parse_amount(&answer) {
            Ok(amount) => return Ok(Some(amount)),
            Err(reason) => {
                writeln!(output, "{}", ui::style_text(&reason, ui::StyleType::Error))?;
            }
        }
    }
}

fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    label: &str,
) -> Result<Option<String>> {
    write!(output, "{label}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
