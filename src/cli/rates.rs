use super::ui;
use crate::core::{BASE_CURRENCY, RateTable};
use crate::store::{self, RateStore};
use anyhow::{Context, Result};
use comfy_table::Cell;

impl RateTable {
    pub fn display_as_table(&self) -> String {
        let mut table = ui::new_styled_table();
        table.set_header(vec![
            ui::header_cell("Currency"),
            ui::header_cell(&format!("{BASE_CURRENCY} per unit")),
            ui::header_cell(&format!("Units per {BASE_CURRENCY}")),
        ]);

        for (code, rate) in self.iter() {
            table.add_row(vec![
                Cell::new(code),
                ui::number_cell(rate, 4),
                ui::number_cell(1.0 / rate, 6),
            ]);
        }

        format!(
            "{}\n\n{}",
            ui::style_text("Exchange Rates", ui::StyleType::Title),
            table
        )
    }
}

pub fn run(store: &dyn RateStore) -> Result<()> {
    let rates = store::initialize_and_load(store).context("Failed to load exchange rates")?;
    println!("{}", rates.display_as_table());
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::core::RateEntry;
    use crate::core::RateTable;

    #[test]
    fn test_table_lists_every_currency() {
        let rates: RateTable = RateEntry::seed().into_iter().collect();
        let output = rates.display_as_table();

        for code in ["USD", "EUR", "GBP", "JPY", "INR"] {
            assert!(output.contains(code), "missing {code} in\n{output}");
        }
        assert!(output.contains("105.3000"));
        assert!(output.contains("INR per unit"));
    }
}
