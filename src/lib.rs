pub mod analysis;
pub mod cli;
pub mod config;
pub mod dataset;
pub mod error;
pub mod generator;
pub mod interface;
pub mod models;
pub mod pipeline;

pub use config::{CostTable, ReportConfig};
pub use error::{Result, WasteError};
pub use models::{FoodItem, MealRecord, MealType, WasteRecord};
pub use pipeline::{analyze, run_analysis, DataSource, WasteAnalysis};
