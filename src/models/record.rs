use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A service slot in the mess day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
}

impl MealType {
    /// All meal types in serving order.
    pub const ALL: [MealType; 3] = [MealType::Breakfast, MealType::Lunch, MealType::Dinner];

    pub fn name(&self) -> &'static str {
        match self {
            MealType::Breakfast => "Breakfast",
            MealType::Lunch => "Lunch",
            MealType::Dinner => "Dinner",
        }
    }
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// A dish served at every meal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FoodItem {
    Rice,
    Roti,
    Dal,
    Vegetables,
    Dessert,
    Snacks,
}

impl FoodItem {
    /// All food items in menu order.
    pub const ALL: [FoodItem; 6] = [
        FoodItem::Rice,
        FoodItem::Roti,
        FoodItem::Dal,
        FoodItem::Vegetables,
        FoodItem::Dessert,
        FoodItem::Snacks,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            FoodItem::Rice => "Rice",
            FoodItem::Roti => "Roti",
            FoodItem::Dal => "Dal",
            FoodItem::Vegetables => "Vegetables",
            FoodItem::Dessert => "Dessert",
            FoodItem::Snacks => "Snacks",
        }
    }
}

impl fmt::Display for FoodItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// One (date, meal, item) observation with its cost-derived fields.
///
/// Quantities are in kilograms. `quantity_wasted` never exceeds
/// `quantity_prepared`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MealRecord {
    pub date: NaiveDate,
    pub meal_type: MealType,
    pub food_item: FoodItem,
    pub quantity_prepared: u32,
    pub quantity_consumed: u32,
    pub quantity_wasted: u32,
    pub cost_per_unit: f64,
    pub total_cost_prepared: f64,
    pub waste_cost: f64,
}

impl MealRecord {
    /// Build a record from raw quantities, deriving waste and cost fields.
    ///
    /// Callers must ensure `quantity_consumed <= quantity_prepared`; the
    /// generator does by construction and `dataset::read_records` rejects
    /// rows that break it. An over-consumed record is clamped to zero waste.
    pub fn new(
        date: NaiveDate,
        meal_type: MealType,
        food_item: FoodItem,
        quantity_prepared: u32,
        quantity_consumed: u32,
        cost_per_unit: f64,
    ) -> Self {
        let quantity_wasted = quantity_prepared.saturating_sub(quantity_consumed);
        Self {
            date,
            meal_type,
            food_item,
            quantity_prepared,
            quantity_consumed,
            quantity_wasted,
            cost_per_unit,
            total_cost_prepared: quantity_prepared as f64 * cost_per_unit,
            waste_cost: quantity_wasted as f64 * cost_per_unit,
        }
    }
}

/// A record augmented with its waste percentage.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WasteRecord {
    #[serde(flatten)]
    pub record: MealRecord,

    /// Wasted / prepared * 100.
    pub percentage_waste: f64,
}
