use serde::Serialize;
use tracing::info;

use crate::analysis::{
    calculate_waste_metrics, daily_waste_analysis, extract_insights, item_wise_analysis,
    meal_wise_analysis, KeyInsights,
};
use crate::config::ReportConfig;
use crate::dataset::load_records;
use crate::error::Result;
use crate::generator::generate_seeded;
use crate::models::{DailyWaste, ItemWaste, MealRecord, MealWaste, WasteRecord};

/// Everything the reporter needs from one run.
#[derive(Debug, Clone, Serialize)]
pub struct WasteAnalysis {
    #[serde(skip)]
    pub records: Vec<WasteRecord>,
    pub meal_wise: Vec<MealWaste>,
    pub item_wise: Vec<ItemWaste>,
    pub daily: Vec<DailyWaste>,
    pub insights: KeyInsights,
}

/// Where the raw records come from.
#[derive(Debug, Clone)]
pub enum DataSource {
    /// Seeded synthetic data per the config.
    Synthetic,
    /// A CSV file of raw observations.
    Csv(std::path::PathBuf),
}

/// Produce the raw record table for `source`.
pub fn load_source(source: &DataSource, config: &ReportConfig) -> Result<Vec<MealRecord>> {
    match source {
        DataSource::Synthetic => generate_seeded(
            config.days,
            config.origin_date,
            &config.cost_table,
            config.seed,
        ),
        DataSource::Csv(path) => load_records(path, &config.cost_table),
    }
}

/// Metrics, aggregates and insights over an existing record table.
pub fn analyze(records: Vec<MealRecord>) -> Result<WasteAnalysis> {
    let records = calculate_waste_metrics(records)?;

    let meal_wise = meal_wise_analysis(&records)?;
    let item_wise = item_wise_analysis(&records)?;
    let daily = daily_waste_analysis(&records)?;
    let insights = extract_insights(&meal_wise, &item_wise, &daily, &records)?;

    info!(
        records = records.len(),
        total_waste_kg = insights.total_waste_kg,
        "analysis complete"
    );

    Ok(WasteAnalysis {
        records,
        meal_wise,
        item_wise,
        daily,
        insights,
    })
}

/// Load and analyze in one step.
pub fn run_analysis(source: &DataSource, config: &ReportConfig) -> Result<WasteAnalysis> {
    let records = load_source(source, config)?;
    analyze(records)
}
