use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use plotters::element::Pie;
use plotters::prelude::*;
use tracing::info;

use crate::error::{Result, WasteError};
use crate::models::{DailyWaste, ItemWaste, MealWaste};

const CHART_SIZE: (u32, u32) = (1024, 768);
const PIE_START_ANGLE: f64 = 140.0;

type DrawResult = std::result::Result<(), Box<dyn Error>>;

/// Files written by [`render_charts`].
#[derive(Debug, Clone, PartialEq)]
pub struct ChartPaths {
    pub meal_wise: PathBuf,
    pub item_wise: PathBuf,
    pub daily_trend: PathBuf,
    pub item_share: PathBuf,
}

impl ChartPaths {
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            meal_wise: dir.join("meal_wise_waste.png"),
            item_wise: dir.join("item_wise_waste.png"),
            daily_trend: dir.join("daily_waste_trend.png"),
            item_share: dir.join("item_waste_share.png"),
        }
    }

    pub fn all(&self) -> [&Path; 4] {
        [
            &self.meal_wise,
            &self.item_wise,
            &self.daily_trend,
            &self.item_share,
        ]
    }
}

fn chart_error(e: Box<dyn Error>) -> WasteError {
    WasteError::Chart(e.to_string())
}

/// Headroom above the tallest value so bars and points are not clipped.
fn y_ceiling(max: u64) -> f64 {
    (max as f64 * 1.1).max(1.0)
}

fn draw_bar_chart(
    path: &Path,
    title: &str,
    x_desc: &str,
    labels: &[String],
    values: &[u64],
) -> DrawResult {
    let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let y_max = y_ceiling(values.iter().copied().max().unwrap_or(0));
    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 30))
        .margin(15)
        .x_label_area_size(50)
        .y_label_area_size(70)
        .build_cartesian_2d((0..labels.len() as i32).into_segmented(), 0f64..y_max)?;

    let label_for = |v: &SegmentValue<i32>| match v {
        SegmentValue::CenterOf(i) => labels.get(*i as usize).cloned().unwrap_or_default(),
        _ => String::new(),
    };

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(labels.len())
        .x_label_formatter(&label_for)
        .x_desc(x_desc)
        .y_desc("Total Waste (kg)")
        .draw()?;

    chart.draw_series(
        Histogram::vertical(&chart)
            .style(BLUE.mix(0.7).filled())
            .margin(12)
            .data(values.iter().enumerate().map(|(i, v)| (i as i32, *v as f64))),
    )?;

    root.present()?;
    Ok(())
}

fn draw_daily_trend(path: &Path, daily: &[DailyWaste]) -> DrawResult {
    let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let y_max = y_ceiling(daily.iter().map(|d| d.total_waste_kg).max().unwrap_or(0));
    let x_max = daily.len().max(1) as i32;
    let mut chart = ChartBuilder::on(&root)
        .caption("Daily Food Waste Trend", ("sans-serif", 30))
        .margin(15)
        .x_label_area_size(70)
        .y_label_area_size(70)
        .build_cartesian_2d(-1..x_max, 0f64..y_max)?;

    let date_for = |i: &i32| {
        usize::try_from(*i)
            .ok()
            .and_then(|i| daily.get(i))
            .map(|d| d.date.format("%m-%d").to_string())
            .unwrap_or_default()
    };

    chart
        .configure_mesh()
        .x_labels(daily.len().min(15))
        .x_label_formatter(&date_for)
        .x_desc("Date")
        .y_desc("Waste (kg)")
        .draw()?;

    let points: Vec<(i32, f64)> = daily
        .iter()
        .enumerate()
        .map(|(i, d)| (i as i32, d.total_waste_kg as f64))
        .collect();

    chart.draw_series(LineSeries::new(points.iter().copied(), &BLUE))?;
    chart.draw_series(
        points
            .iter()
            .map(|&(x, y)| Circle::new((x, y), 4, BLUE.filled())),
    )?;

    root.present()?;
    Ok(())
}

fn draw_item_share(path: &Path, item_wise: &[ItemWaste]) -> DrawResult {
    let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let titled = root.titled("Food Waste Contribution by Item", ("sans-serif", 30))?;
    let (w, h) = titled.dim_in_pixel();
    let center = (w as i32 / 2, h as i32 / 2);
    let radius = f64::from(w.min(h)) * 0.35;

    let sizes: Vec<f64> = item_wise.iter().map(|r| r.total_waste_kg as f64).collect();
    let labels: Vec<String> = item_wise.iter().map(|r| r.food_item.to_string()).collect();
    let colors: Vec<RGBColor> = (0..item_wise.len())
        .map(|i| Palette99::pick(i).to_rgba())
        .map(|c| RGBColor(c.0, c.1, c.2))
        .collect();

    let mut pie = Pie::new(&center, &radius, &sizes, &colors, &labels);
    pie.start_angle(PIE_START_ANGLE);
    pie.label_style(("sans-serif", 20).into_font().color(&BLACK));
    pie.percentages(("sans-serif", 16).into_font().color(&WHITE));
    titled.draw(&pie)?;

    root.present()?;
    Ok(())
}

/// Render the four waste charts as PNG files under `dir`.
///
/// The directory is created if it does not exist.
pub fn render_charts(
    dir: &Path,
    meal_wise: &[MealWaste],
    item_wise: &[ItemWaste],
    daily: &[DailyWaste],
) -> Result<ChartPaths> {
    fs::create_dir_all(dir)?;
    let paths = ChartPaths::in_dir(dir);

    let meal_labels: Vec<String> = meal_wise.iter().map(|r| r.meal_type.to_string()).collect();
    let meal_values: Vec<u64> = meal_wise.iter().map(|r| r.total_waste_kg).collect();
    draw_bar_chart(
        &paths.meal_wise,
        "Meal-wise Food Waste (kg)",
        "Meal Type",
        &meal_labels,
        &meal_values,
    )
    .map_err(chart_error)?;

    let item_labels: Vec<String> = item_wise.iter().map(|r| r.food_item.to_string()).collect();
    let item_values: Vec<u64> = item_wise.iter().map(|r| r.total_waste_kg).collect();
    draw_bar_chart(
        &paths.item_wise,
        "Item-wise Food Waste (kg)",
        "Food Item",
        &item_labels,
        &item_values,
    )
    .map_err(chart_error)?;

    draw_daily_trend(&paths.daily_trend, daily).map_err(chart_error)?;
    draw_item_share(&paths.item_share, item_wise).map_err(chart_error)?;

    for path in paths.all() {
        info!(path = %path.display(), "wrote chart");
    }
    Ok(paths)
}
