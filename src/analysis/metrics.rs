use tracing::info;

use crate::error::{Result, WasteError};
use crate::models::{MealRecord, WasteRecord};

/// Percentage of the prepared quantity that went to waste.
///
/// Returns `None` when nothing was prepared.
#[inline]
pub fn percentage_waste(wasted: u32, prepared: u32) -> Option<f64> {
    if prepared == 0 {
        return None;
    }
    Some(wasted as f64 / prepared as f64 * 100.0)
}

/// Attach `percentage_waste` to every record.
///
/// Order is preserved and cost fields pass through untouched. Fails on the
/// first record with a zero prepared quantity.
pub fn calculate_waste_metrics(records: Vec<MealRecord>) -> Result<Vec<WasteRecord>> {
    let scored = records
        .into_iter()
        .enumerate()
        .map(|(i, record)| {
            let pct = percentage_waste(record.quantity_wasted, record.quantity_prepared)
                .ok_or_else(|| WasteError::InvalidRecord {
                    line: i + 1,
                    reason: format!(
                        "{} {} on {} has zero prepared quantity",
                        record.meal_type, record.food_item, record.date
                    ),
                })?;
            Ok(WasteRecord {
                record,
                percentage_waste: pct,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    info!(records = scored.len(), "calculated waste metrics");
    Ok(scored)
}
