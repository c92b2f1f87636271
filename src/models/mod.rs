mod aggregate;
mod record;

pub use aggregate::{DailyWaste, ItemWaste, MealWaste};
pub use record::{FoodItem, MealRecord, MealType, WasteRecord};
