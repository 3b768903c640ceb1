use crate::adapters::{flat_file_reader, is_blank, is_comment, line_of};
use crate::core::ledger::InventoryLedger;
use crate::domain::model::InventoryEntry;
use crate::utils::error::{Result, StoreError};

/// Parse `IngredientName,Quantity,UnitCost` lines into a ledger.
///
/// Blank and `#` lines are ignored; lines without exactly three fields or with a
/// non-numeric quantity/cost are skipped. Data that is not valid UTF-8 fails the
/// whole load.
pub fn parse_inventory(data: &[u8]) -> Result<InventoryLedger> {
    let mut ledger = InventoryLedger::new();
    let mut skipped = 0usize;

    for result in flat_file_reader(data).records() {
        let record = result?;
        if is_blank(&record) || is_comment(&record) {
            continue;
        }
        let line = line_of(&record);

        if record.len() != 3 {
            tracing::warn!(
                "Skipping inventory line {}: expected 3 fields, found {}",
                line,
                record.len()
            );
            skipped += 1;
            continue;
        }

        let quantity = record[1].parse::<u64>();
        let unit_cost = record[2]
            .parse::<f64>()
            .ok()
            .filter(|cost| cost.is_finite() && *cost >= 0.0);
        match (quantity, unit_cost) {
            (Ok(quantity), Some(unit_cost)) => {
                tracing::debug!("  {}: qty={}, cost={}", &record[0], quantity, unit_cost);
                ledger.insert(&record[0], InventoryEntry::new(quantity, unit_cost));
            }
            _ => {
                tracing::warn!(
                    "Skipping inventory line {}: invalid quantity '{}' or cost '{}'",
                    line,
                    &record[1],
                    &record[2]
                );
                skipped += 1;
            }
        }
    }

    tracing::info!("Loaded {} inventory items ({} lines skipped)", ledger.len(), skipped);
    Ok(ledger)
}

/// Render a ledger back into the inventory file format.
pub fn write_inventory(ledger: &InventoryLedger) -> Result<Vec<u8>> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .quote_style(csv::QuoteStyle::Never)
        .from_writer(Vec::new());

    for (name, entry) in ledger.entries() {
        writer.write_record([
            name.to_string(),
            entry.quantity().to_string(),
            entry.unit_cost().to_string(),
        ])?;
    }

    writer
        .into_inner()
        .map_err(|e| StoreError::IoError(e.into_error()))
}
