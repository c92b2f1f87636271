use std::collections::BTreeMap;

use chrono::NaiveDate;
use tracing::info;

use crate::error::{Result, WasteError};
use crate::models::{DailyWaste, ItemWaste, MealWaste, WasteRecord};

/// Running sums for one group.
#[derive(Debug, Default, Clone, Copy)]
struct Acc {
    waste_kg: u64,
    loss: f64,
}

/// Sum waste per key, keeping keys in first-seen order.
fn group_first_seen<K, F>(records: &[WasteRecord], key: F) -> Result<Vec<(K, Acc)>>
where
    K: PartialEq + Copy,
    F: Fn(&WasteRecord) -> K,
{
    if records.is_empty() {
        return Err(WasteError::EmptyDataset);
    }

    let mut groups: Vec<(K, Acc)> = Vec::new();
    for r in records {
        let k = key(r);
        let pos = match groups.iter().position(|(g, _)| *g == k) {
            Some(pos) => pos,
            None => {
                groups.push((k, Acc::default()));
                groups.len() - 1
            }
        };
        let acc = &mut groups[pos].1;
        acc.waste_kg += r.record.quantity_wasted as u64;
        acc.loss += r.record.waste_cost;
    }
    Ok(groups)
}

/// Total waste quantity and cost per meal type.
pub fn meal_wise_analysis(records: &[WasteRecord]) -> Result<Vec<MealWaste>> {
    let rows: Vec<MealWaste> = group_first_seen(records, |r| r.record.meal_type)?
        .into_iter()
        .map(|(meal_type, acc)| MealWaste {
            meal_type,
            total_waste_kg: acc.waste_kg,
            total_loss: acc.loss,
        })
        .collect();

    info!(groups = rows.len(), "meal-wise aggregation done");
    Ok(rows)
}

/// Total waste quantity and cost per food item.
pub fn item_wise_analysis(records: &[WasteRecord]) -> Result<Vec<ItemWaste>> {
    let rows: Vec<ItemWaste> = group_first_seen(records, |r| r.record.food_item)?
        .into_iter()
        .map(|(food_item, acc)| ItemWaste {
            food_item,
            total_waste_kg: acc.waste_kg,
            total_loss: acc.loss,
        })
        .collect();

    info!(groups = rows.len(), "item-wise aggregation done");
    Ok(rows)
}

/// Total waste quantity per day, oldest first.
pub fn daily_waste_analysis(records: &[WasteRecord]) -> Result<Vec<DailyWaste>> {
    if records.is_empty() {
        return Err(WasteError::EmptyDataset);
    }

    let mut by_date: BTreeMap<NaiveDate, u64> = BTreeMap::new();
    for r in records {
        *by_date.entry(r.record.date).or_insert(0) += r.record.quantity_wasted as u64;
    }

    let rows: Vec<DailyWaste> = by_date
        .into_iter()
        .map(|(date, total_waste_kg)| DailyWaste {
            date,
            total_waste_kg,
        })
        .collect();

    info!(days = rows.len(), "daily aggregation done");
    Ok(rows)
}
