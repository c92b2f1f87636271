use chrono::NaiveDate;
use serde::Serialize;

use crate::error::{Result, WasteError};
use crate::models::{DailyWaste, FoodItem, ItemWaste, MealType, MealWaste, WasteRecord};

/// Fixed advice printed after every report, independent of the data.
pub const RECOMMENDATIONS: [&str; 10] = [
    "Optimize portion sizes for the highest wastage meal to prevent over-preparation.",
    "Implement batch cooking and portion control for frequently wasted food items.",
    "Introduce food waste tracking dashboards for mess management.",
    "Conduct awareness programs for students and staff on food wastage reduction.",
    "Reduce quantities of consistently over-prepared food items.",
    "Use historical data for demand forecasting and meal planning.",
    "Redesign the menu focusing on high-consumption, low-waste items.",
    "Establish partnerships with NGOs for safe food donation.",
    "Monitor financial losses monthly to improve cost efficiency.",
    "Reducing food waste also contributes to environmental sustainability.",
];

/// Headline numbers for the printed summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeyInsights {
    pub highest_waste_meal: MealType,
    pub most_wasted_item: FoodItem,
    pub total_waste_kg: u64,
    pub total_loss: f64,
    pub peak_waste_day: NaiveDate,
}

/// Entry with the largest key. Ties go to the earliest entry.
fn first_max_by_key<T, F>(rows: &[T], key: F) -> Option<&T>
where
    F: Fn(&T) -> u64,
{
    let mut best: Option<(&T, u64)> = None;
    for row in rows {
        let k = key(row);
        match best {
            Some((_, best_k)) if k <= best_k => {}
            _ => best = Some((row, k)),
        }
    }
    best.map(|(row, _)| row)
}

/// Meal type with the most waste.
pub fn highest_waste_meal(meal_wise: &[MealWaste]) -> Option<MealType> {
    first_max_by_key(meal_wise, |r| r.total_waste_kg).map(|r| r.meal_type)
}

/// Food item with the most waste.
pub fn most_wasted_item(item_wise: &[ItemWaste]) -> Option<FoodItem> {
    first_max_by_key(item_wise, |r| r.total_waste_kg).map(|r| r.food_item)
}

/// Day with the most waste across all meals and items.
pub fn peak_waste_day(daily: &[DailyWaste]) -> Option<NaiveDate> {
    first_max_by_key(daily, |r| r.total_waste_kg).map(|r| r.date)
}

/// Derive the summary from the aggregates and the full record set.
pub fn extract_insights(
    meal_wise: &[MealWaste],
    item_wise: &[ItemWaste],
    daily: &[DailyWaste],
    records: &[WasteRecord],
) -> Result<KeyInsights> {
    if records.is_empty() {
        return Err(WasteError::EmptyDataset);
    }

    let total_waste_kg: u64 = records
        .iter()
        .map(|r| r.record.quantity_wasted as u64)
        .sum();
    let total_loss: f64 = records.iter().map(|r| r.record.waste_cost).sum();

    Ok(KeyInsights {
        highest_waste_meal: highest_waste_meal(meal_wise).ok_or(WasteError::EmptyDataset)?,
        most_wasted_item: most_wasted_item(item_wise).ok_or(WasteError::EmptyDataset)?,
        total_waste_kg,
        total_loss,
        peak_waste_day: peak_waste_day(daily).ok_or(WasteError::EmptyDataset)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meal(meal_type: MealType, kg: u64) -> MealWaste {
        MealWaste {
            meal_type,
            total_waste_kg: kg,
            total_loss: kg as f64 * 10.0,
        }
    }

    #[test]
    fn test_highest_meal() {
        let rows = vec![
            meal(MealType::Breakfast, 30),
            meal(MealType::Lunch, 45),
            meal(MealType::Dinner, 20),
        ];
        assert_eq!(highest_waste_meal(&rows), Some(MealType::Lunch));
    }

    #[test]
    fn test_tie_goes_to_first() {
        let rows = vec![
            meal(MealType::Breakfast, 45),
            meal(MealType::Lunch, 45),
            meal(MealType::Dinner, 20),
        ];
        assert_eq!(highest_waste_meal(&rows), Some(MealType::Breakfast));
    }

    #[test]
    fn test_peak_day() {
        let first = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
        let second = NaiveDate::from_ymd_opt(2023, 1, 2).unwrap();
        let daily = vec![
            DailyWaste {
                date: first,
                total_waste_kg: 40,
            },
            DailyWaste {
                date: second,
                total_waste_kg: 55,
            },
        ];
        assert_eq!(peak_waste_day(&daily), Some(second));
    }

    #[test]
    fn test_item_tie_goes_to_first() {
        let item = |food_item, kg| ItemWaste {
            food_item,
            total_waste_kg: kg,
            total_loss: 0.0,
        };
        let rows = vec![
            item(FoodItem::Rice, 12),
            item(FoodItem::Dal, 31),
            item(FoodItem::Dessert, 31),
            item(FoodItem::Snacks, 31),
        ];
        assert_eq!(most_wasted_item(&rows), Some(FoodItem::Dal));
    }

    #[test]
    fn test_peak_day_tie_goes_to_earliest() {
        let day = |d| NaiveDate::from_ymd_opt(2023, 1, d).unwrap();
        let daily: Vec<DailyWaste> = [(1, 40), (2, 55), (3, 55)]
            .into_iter()
            .map(|(d, kg)| DailyWaste {
                date: day(d),
                total_waste_kg: kg,
            })
            .collect();
        assert_eq!(peak_waste_day(&daily), Some(day(2)));
    }

    #[test]
    fn test_empty_lookups() {
        assert_eq!(highest_waste_meal(&[]), None);
        assert_eq!(most_wasted_item(&[]), None);
        assert!(matches!(
            extract_insights(&[], &[], &[], &[]),
            Err(WasteError::EmptyDataset)
        ));
    }

    #[test]
    fn test_ten_recommendations() {
        assert_eq!(RECOMMENDATIONS.len(), 10);
        assert!(RECOMMENDATIONS.iter().all(|r| r.ends_with('.')));
    }
}
