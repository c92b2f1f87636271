pub mod aggregation;
pub mod insights;
pub mod metrics;

pub use aggregation::{daily_waste_analysis, item_wise_analysis, meal_wise_analysis};
pub use insights::{extract_insights, KeyInsights, RECOMMENDATIONS};
pub use metrics::{calculate_waste_metrics, percentage_waste};
