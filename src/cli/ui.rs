use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use console::style;

pub const TITLE: &str = "💱 Currency Converter";
pub const SUBTITLE: &str = "Easily convert between different world currencies using stored rates!";
pub const CAPTION: &str = "🌍 Rates are a static snapshot against INR, stored locally";
pub const INVALID_SELECTION: &str = "Invalid currency selection!";
pub const AMOUNT_OUT_OF_RANGE: &str = "Amount is too large to convert!";

/// Defines different styles for text elements.
pub enum StyleType {
    Title,
    Label,
    Success,
    Error,
    Subtle,
}

/// Applies a consistent style to a string.
pub fn style_text(text: &str, style_type: StyleType) -> String {
    let styled = match style_type {
        StyleType::Title => style(text).bold().underlined(),
        StyleType::Label => style(text).bold(),
        StyleType::Success => style(text).green().bold(),
        StyleType::Error => style(text).red(),
        StyleType::Subtle => style(text).dim(),
    };
    styled.to_string()
}

/// Message shown after a successful conversion.
pub fn success_message(amount: f64, from: &str, converted: f64, to: &str) -> String {
    format!("💰 {amount:.2} {from} = {converted:.2} {to}")
}

/// Creates a new `comfy_table::Table` with standard styling.
pub fn new_styled_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Creates a styled header cell for a table.
pub fn header_cell(text: &str) -> Cell {
    Cell::new(text)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

pub fn number_cell(value: f64, decimals: usize) -> Cell {
    Cell::new(format!("{value:.decimals$}")).set_alignment(CellAlignment::Right)
}

/// Separator line matching the terminal width.
pub fn separator() -> String {
    let term_width = console::Term::stdout()
        .size_checked()
        .map(|(_, w)| w as usize)
        .unwrap_or(80);
    "─".repeat(term_width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_message_uses_two_decimals() {
        assert_eq!(
            success_message(100.0, "USD", 91.933_701_657, "EUR"),
            "💰 100.00 USD = 91.93 EUR"
        );
        assert_eq!(success_message(0.0, "GBP", 0.0, "USD"), "💰 0.00 GBP = 0.00 USD");
    }

    #[test]
    fn test_number_cell_formats_precision() {
        assert_eq!(number_cell(0.56, 4).content(), "0.5600");
        assert_eq!(number_cell(1.0 / 83.2, 6).content(), "0.012019");
    }
}
