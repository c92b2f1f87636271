use chrono::NaiveDate;

use crate::models::FoodItem;

/// Days of data generated when no count is given.
pub const DEFAULT_DAYS: i64 = 30;

/// Seed used for the default reproducible run.
pub const DEFAULT_SEED: u64 = 42;

/// Prepared quantity range in kg: [PREPARED_MIN, PREPARED_MAX).
pub const PREPARED_MIN: u32 = 10;
pub const PREPARED_MAX: u32 = 30;

/// Lower bound for consumption as a percentage of prepared (floored).
pub const CONSUMED_MIN_PERCENT: u32 = 60;

/// Currency label printed in front of financial totals.
pub const DEFAULT_CURRENCY_LABEL: &str = "₹";

/// Directory charts are written into.
pub const DEFAULT_CHART_DIR: &str = "charts";

/// Cost per kg for each food item.
pub const DEFAULT_COST_PER_KG: [(FoodItem, f64); 6] = [
    (FoodItem::Rice, 30.0),
    (FoodItem::Roti, 10.0),
    (FoodItem::Dal, 40.0),
    (FoodItem::Vegetables, 20.0),
    (FoodItem::Dessert, 50.0),
    (FoodItem::Snacks, 25.0),
];

/// First day of the generated date sequence.
pub const ORIGIN_DATE: NaiveDate = match NaiveDate::from_ymd_opt(2023, 1, 1) {
    Some(date) => date,
    None => panic!("origin date is not a valid calendar date"),
};

pub fn default_origin_date() -> NaiveDate {
    ORIGIN_DATE
}

/// Lowest consumed quantity allowed for a prepared quantity.
#[inline]
pub fn consumed_floor(prepared: u32) -> u32 {
    prepared * CONSUMED_MIN_PERCENT / 100
}

/// Highest waste percentage the generator can produce for `prepared`.
///
/// Consumption is floored, so this can exceed `100 - CONSUMED_MIN_PERCENT`
/// (prepared 11 allows consumed 6, 45.45% waste).
pub fn max_waste_percentage(prepared: u32) -> f64 {
    if prepared == 0 {
        return 0.0;
    }
    (prepared - consumed_floor(prepared)) as f64 / prepared as f64 * 100.0
}
