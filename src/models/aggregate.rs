use chrono::NaiveDate;
use serde::Serialize;

use crate::models::{FoodItem, MealType};

/// Waste totals for one meal type.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MealWaste {
    pub meal_type: MealType,
    pub total_waste_kg: u64,
    pub total_loss: f64,
}

/// Waste totals for one food item.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemWaste {
    pub food_item: FoodItem,
    pub total_waste_kg: u64,
    pub total_loss: f64,
}

/// Waste total for one calendar day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyWaste {
    pub date: NaiveDate,
    pub total_waste_kg: u64,
}
