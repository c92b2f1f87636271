use chrono::NaiveDate;

use mess_waste_analysis::analysis::insights::{highest_waste_meal, peak_waste_day};
use mess_waste_analysis::analysis::{
    calculate_waste_metrics, daily_waste_analysis, item_wise_analysis, meal_wise_analysis,
};
use mess_waste_analysis::config::{CostTable, ReportConfig};
use mess_waste_analysis::generator::{default_origin_date, generate_seeded};
use mess_waste_analysis::interface::format_insights;
use mess_waste_analysis::models::{DailyWaste, FoodItem, MealType, MealWaste, WasteRecord};
use mess_waste_analysis::{analyze, run_analysis, DataSource, WasteError};

fn scored(days: i64) -> Vec<WasteRecord> {
    let records = generate_seeded(days, default_origin_date(), &CostTable::default(), 42).unwrap();
    calculate_waste_metrics(records).unwrap()
}

#[test]
fn test_totals_agree_across_groupings() {
    let records = scored(30);
    let grand_kg: u64 = records.iter().map(|r| r.record.quantity_wasted as u64).sum();
    let grand_cost: f64 = records.iter().map(|r| r.record.waste_cost).sum();

    let meal_wise = meal_wise_analysis(&records).unwrap();
    let item_wise = item_wise_analysis(&records).unwrap();
    let daily = daily_waste_analysis(&records).unwrap();

    assert_eq!(meal_wise.iter().map(|r| r.total_waste_kg).sum::<u64>(), grand_kg);
    assert_eq!(item_wise.iter().map(|r| r.total_waste_kg).sum::<u64>(), grand_kg);
    assert_eq!(daily.iter().map(|r| r.total_waste_kg).sum::<u64>(), grand_kg);

    let meal_cost: f64 = meal_wise.iter().map(|r| r.total_loss).sum();
    let item_cost: f64 = item_wise.iter().map(|r| r.total_loss).sum();
    assert!((meal_cost - grand_cost).abs() < 1e-6);
    assert!((item_cost - grand_cost).abs() < 1e-6);
}

#[test]
fn test_group_keys_follow_domain_order() {
    let records = scored(5);

    let meals: Vec<MealType> = meal_wise_analysis(&records)
        .unwrap()
        .iter()
        .map(|r| r.meal_type)
        .collect();
    assert_eq!(meals, MealType::ALL.to_vec());

    let items: Vec<FoodItem> = item_wise_analysis(&records)
        .unwrap()
        .iter()
        .map(|r| r.food_item)
        .collect();
    assert_eq!(items, FoodItem::ALL.to_vec());

    let daily = daily_waste_analysis(&records).unwrap();
    assert_eq!(daily.len(), 5);
    assert!(daily.windows(2).all(|w| w[0].date < w[1].date));
}

#[test]
fn test_lunch_is_highest_wastage_meal() {
    let rows = vec![
        MealWaste {
            meal_type: MealType::Breakfast,
            total_waste_kg: 30,
            total_loss: 0.0,
        },
        MealWaste {
            meal_type: MealType::Lunch,
            total_waste_kg: 45,
            total_loss: 0.0,
        },
        MealWaste {
            meal_type: MealType::Dinner,
            total_waste_kg: 20,
            total_loss: 0.0,
        },
    ];
    assert_eq!(highest_waste_meal(&rows), Some(MealType::Lunch));
}

#[test]
fn test_peak_day_lookup() {
    let daily = vec![
        DailyWaste {
            date: NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
            total_waste_kg: 40,
        },
        DailyWaste {
            date: NaiveDate::from_ymd_opt(2023, 1, 2).unwrap(),
            total_waste_kg: 55,
        },
    ];
    assert_eq!(
        peak_waste_day(&daily),
        NaiveDate::from_ymd_opt(2023, 1, 2)
    );
}

#[test]
fn test_full_run_is_reproducible() {
    let config = ReportConfig::default();
    let a = run_analysis(&DataSource::Synthetic, &config).unwrap();
    let b = run_analysis(&DataSource::Synthetic, &config).unwrap();

    assert_eq!(a.records, b.records);
    assert_eq!(a.insights, b.insights);
    assert_eq!(
        format_insights(&a.insights, "₹"),
        format_insights(&b.insights, "₹")
    );
}

#[test]
fn test_insights_match_aggregates() {
    let config = ReportConfig::default();
    let analysis = run_analysis(&DataSource::Synthetic, &config).unwrap();

    let max_meal = analysis.meal_wise.iter().map(|r| r.total_waste_kg).max().unwrap();
    let chosen = analysis
        .meal_wise
        .iter()
        .find(|r| r.meal_type == analysis.insights.highest_waste_meal)
        .unwrap();
    assert_eq!(chosen.total_waste_kg, max_meal);

    let max_day = analysis.daily.iter().map(|r| r.total_waste_kg).max().unwrap();
    let peak = analysis
        .daily
        .iter()
        .find(|r| r.date == analysis.insights.peak_waste_day)
        .unwrap();
    assert_eq!(peak.total_waste_kg, max_day);
}

#[test]
fn test_zero_days_is_invalid_argument() {
    let config = ReportConfig {
        days: 0,
        ..ReportConfig::default()
    };
    let err = run_analysis(&DataSource::Synthetic, &config).unwrap_err();
    assert!(matches!(err, WasteError::InvalidArgument(_)));
}

#[test]
fn test_csv_source() {
    use std::io::Write;

    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        "date,meal_type,food_item,quantity_prepared,quantity_consumed\n\
         2023-02-01,Breakfast,Roti,20,10\n\
         2023-02-01,Dinner,Dessert,10,9\n\
         2023-02-02,Lunch,Dal,16,10\n"
    )
    .unwrap();

    let config = ReportConfig::default();
    let analysis = run_analysis(&DataSource::Csv(file.path().to_path_buf()), &config).unwrap();

    assert_eq!(analysis.insights.total_waste_kg, 17);
    assert_eq!(analysis.insights.highest_waste_meal, MealType::Breakfast);
    assert_eq!(analysis.insights.most_wasted_item, FoodItem::Roti);
    assert_eq!(
        analysis.insights.peak_waste_day,
        NaiveDate::from_ymd_opt(2023, 2, 1).unwrap()
    );
    // 10 * 10 + 1 * 50 + 6 * 40
    assert!((analysis.insights.total_loss - 390.0).abs() < 1e-9);
}

#[test]
fn test_empty_csv_is_empty_dataset() {
    let records = Vec::new();
    assert!(matches!(analyze(records), Err(WasteError::EmptyDataset)));
}
