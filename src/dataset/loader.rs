use std::fs::File;
use std::io::Read;
use std::path::Path;

use chrono::NaiveDate;
use serde::Deserialize;
use tracing::info;

use crate::config::CostTable;
use crate::error::{Result, WasteError};
use crate::models::{FoodItem, MealRecord, MealType};

/// One row of an externally supplied dataset.
///
/// Waste and cost columns are derived on load, never read.
#[derive(Debug, Clone, Deserialize)]
pub struct RawRecord {
    pub date: NaiveDate,
    pub meal_type: MealType,
    pub food_item: FoodItem,
    pub quantity_prepared: u32,
    pub quantity_consumed: u32,
}

impl RawRecord {
    fn into_record(self, line: usize, costs: &CostTable) -> Result<MealRecord> {
        if self.quantity_prepared == 0 {
            return Err(WasteError::InvalidRecord {
                line,
                reason: "quantity_prepared must be positive".to_string(),
            });
        }
        if self.quantity_consumed > self.quantity_prepared {
            return Err(WasteError::InvalidRecord {
                line,
                reason: format!(
                    "consumed {} exceeds prepared {}",
                    self.quantity_consumed, self.quantity_prepared
                ),
            });
        }
        Ok(MealRecord::new(
            self.date,
            self.meal_type,
            self.food_item,
            self.quantity_prepared,
            self.quantity_consumed,
            costs.cost(self.food_item),
        ))
    }
}

/// Parse CSV rows from any reader. Row numbers in errors are 1-based data lines.
pub fn read_records<R: Read>(reader: R, costs: &CostTable) -> Result<Vec<MealRecord>> {
    let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);

    let mut records = Vec::new();
    for (i, row) in rdr.deserialize::<RawRecord>().enumerate() {
        records.push(row?.into_record(i + 1, costs)?);
    }
    Ok(records)
}

/// Load a dataset from a CSV file with a header row.
pub fn load_records<P: AsRef<Path>>(path: P, costs: &CostTable) -> Result<Vec<MealRecord>> {
    let file = File::open(path.as_ref())?;
    let records = read_records(file, costs)?;
    info!(
        path = %path.as_ref().display(),
        records = records.len(),
        "loaded external dataset"
    );
    Ok(records)
}
