use crate::analysis::{KeyInsights, RECOMMENDATIONS};
use crate::models::{DailyWaste, ItemWaste, MealWaste};

/// Build the key-insights and recommendations report.
pub fn format_insights(insights: &KeyInsights, currency: &str) -> String {
    let mut lines = vec![
        String::new(),
        "================ KEY INSIGHTS ================".to_string(),
        format!("Highest Wastage Meal       : {}", insights.highest_waste_meal),
        format!("Most Wasted Food Item     : {}", insights.most_wasted_item),
        format!(
            "Total Food Waste          : {:.2} kg",
            insights.total_waste_kg as f64
        ),
        format!(
            "Total Financial Loss      : {}{:.2}",
            currency, insights.total_loss
        ),
        format!("Peak Waste Day            : {}", insights.peak_waste_day),
        String::new(),
        "================ CONCLUSIONS & RECOMMENDATIONS ================".to_string(),
    ];

    for (i, rec) in RECOMMENDATIONS.iter().enumerate() {
        lines.push(format!("{}. {}", i + 1, rec));
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// Print the key-insights report to stdout.
pub fn display_insights(insights: &KeyInsights, currency: &str) {
    print!("{}", format_insights(insights, currency));
}

/// Build plain-text tables for the three aggregates.
pub fn format_aggregate_tables(
    meal_wise: &[MealWaste],
    item_wise: &[ItemWaste],
    daily: &[DailyWaste],
    currency: &str,
) -> String {
    let mut lines = Vec::new();

    lines.push(String::new());
    lines.push("=== Meal-wise Waste ===".to_string());
    for row in meal_wise {
        lines.push(format!(
            "  {:<12} {:>6} kg  {}{:.2}",
            row.meal_type, row.total_waste_kg, currency, row.total_loss
        ));
    }

    lines.push(String::new());
    lines.push("=== Item-wise Waste ===".to_string());
    for row in item_wise {
        lines.push(format!(
            "  {:<12} {:>6} kg  {}{:.2}",
            row.food_item, row.total_waste_kg, currency, row.total_loss
        ));
    }

    lines.push(String::new());
    lines.push("=== Daily Waste ===".to_string());
    for row in daily {
        lines.push(format!("  {}  {:>6} kg", row.date, row.total_waste_kg));
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// Print the aggregate tables to stdout.
pub fn display_aggregate_tables(
    meal_wise: &[MealWaste],
    item_wise: &[ItemWaste],
    daily: &[DailyWaste],
    currency: &str,
) {
    print!("{}", format_aggregate_tables(meal_wise, item_wise, daily, currency));
}
