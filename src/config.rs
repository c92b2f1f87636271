use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::Deserialize;
use tracing::info;

use crate::error::{Result, WasteError};
use crate::generator::constants::{
    default_origin_date, DEFAULT_CHART_DIR, DEFAULT_COST_PER_KG, DEFAULT_CURRENCY_LABEL,
    DEFAULT_DAYS, DEFAULT_SEED,
};
use crate::models::FoodItem;

/// Cost per kg for every food item.
///
/// Always complete: construction fails unless each item has a finite,
/// non-negative cost.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "BTreeMap<FoodItem, f64>")]
pub struct CostTable {
    costs: [f64; FoodItem::ALL.len()],
}

impl CostTable {
    /// Build from an item → cost map.
    pub fn from_map(map: &BTreeMap<FoodItem, f64>) -> Result<Self> {
        let mut costs = [0.0; FoodItem::ALL.len()];
        for (slot, item) in costs.iter_mut().zip(FoodItem::ALL) {
            let cost = *map.get(&item).ok_or_else(|| {
                WasteError::InvalidArgument(format!("cost table is missing {}", item))
            })?;
            if !cost.is_finite() || cost < 0.0 {
                return Err(WasteError::InvalidArgument(format!(
                    "cost for {} must be a non-negative number, got {}",
                    item, cost
                )));
            }
            *slot = cost;
        }
        Ok(Self { costs })
    }

    /// Cost per kg of `item`.
    #[inline]
    pub fn cost(&self, item: FoodItem) -> f64 {
        self.costs[item as usize]
    }
}

impl Default for CostTable {
    fn default() -> Self {
        let mut costs = [0.0; FoodItem::ALL.len()];
        for (item, cost) in DEFAULT_COST_PER_KG {
            costs[item as usize] = cost;
        }
        Self { costs }
    }
}

impl TryFrom<BTreeMap<FoodItem, f64>> for CostTable {
    type Error = WasteError;

    fn try_from(map: BTreeMap<FoodItem, f64>) -> Result<Self> {
        Self::from_map(&map)
    }
}

/// Settings for one analysis run.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReportConfig {
    pub days: i64,
    pub seed: u64,
    pub origin_date: NaiveDate,
    pub currency_label: String,
    pub cost_table: CostTable,
    pub chart_dir: PathBuf,
    pub render_charts: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            days: DEFAULT_DAYS,
            seed: DEFAULT_SEED,
            origin_date: default_origin_date(),
            currency_label: DEFAULT_CURRENCY_LABEL.to_string(),
            cost_table: CostTable::default(),
            chart_dir: PathBuf::from(DEFAULT_CHART_DIR),
            render_charts: true,
        }
    }
}

impl ReportConfig {
    /// Load a config from a JSON file. Missing fields take their defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: ReportConfig = serde_json::from_str(&content)?;
        config.validate()?;
        info!(path = %path.as_ref().display(), "loaded report config");
        Ok(config)
    }

    /// Check values serde cannot enforce.
    pub fn validate(&self) -> Result<()> {
        if self.days <= 0 {
            return Err(WasteError::InvalidArgument(format!(
                "days must be positive, got {}",
                self.days
            )));
        }
        Ok(())
    }
}
