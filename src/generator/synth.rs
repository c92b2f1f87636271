use chrono::{Days, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use crate::config::CostTable;
use crate::error::{Result, WasteError};
use crate::generator::constants::{consumed_floor, PREPARED_MAX, PREPARED_MIN};
use crate::models::{FoodItem, MealRecord, MealType};

/// Generate one record per (date, meal type, food item) for `days` days.
///
/// Records come out date-major, then meal type, then food item, each in
/// its enum order. The RNG is consumed in exactly that order, so a given
/// RNG state always produces the same table.
pub fn generate_food_data<R: Rng>(
    days: i64,
    origin: NaiveDate,
    costs: &CostTable,
    rng: &mut R,
) -> Result<Vec<MealRecord>> {
    if days <= 0 {
        return Err(WasteError::InvalidArgument(format!(
            "day count must be positive, got {}",
            days
        )));
    }

    let past_calendar = || {
        WasteError::InvalidArgument(format!(
            "{} days from {} runs past the calendar",
            days, origin
        ))
    };
    origin
        .checked_add_days(Days::new(days as u64 - 1))
        .ok_or_else(past_calendar)?;

    let mut records = Vec::new();
    for offset in 0..days as u64 {
        let date = origin
            .checked_add_days(Days::new(offset))
            .ok_or_else(past_calendar)?;

        for meal in MealType::ALL {
            for item in FoodItem::ALL {
                let prepared = rng.gen_range(PREPARED_MIN..PREPARED_MAX);
                let consumed = rng.gen_range(consumed_floor(prepared)..=prepared);
                records.push(MealRecord::new(
                    date,
                    meal,
                    item,
                    prepared,
                    consumed,
                    costs.cost(item),
                ));
            }
        }
        debug!(%date, "generated day");
    }

    info!(days, records = records.len(), "generated synthetic food data");
    Ok(records)
}

/// Generate with a fresh `StdRng` seeded from `seed`.
pub fn generate_seeded(
    days: i64,
    origin: NaiveDate,
    costs: &CostTable,
    seed: u64,
) -> Result<Vec<MealRecord>> {
    let mut rng = StdRng::seed_from_u64(seed);
    generate_food_data(days, origin, costs, &mut rng)
}
