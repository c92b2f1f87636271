use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use mess_waste_analysis::cli::{Cli, Command};
use mess_waste_analysis::config::ReportConfig;
use mess_waste_analysis::error::Result;
use mess_waste_analysis::interface::{display_aggregate_tables, display_insights, render_charts};
use mess_waste_analysis::pipeline::{run_analysis, DataSource, WasteAnalysis};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Merge the optional config file with command-line overrides.
fn build_config(cli: &Cli) -> Result<ReportConfig> {
    let mut config = match &cli.config {
        Some(path) => ReportConfig::load(path)?,
        None => ReportConfig::default(),
    };

    if let Some(days) = cli.days {
        config.days = days;
    }
    if let Some(seed) = cli.seed {
        config.seed = seed;
    }
    if let Some(currency) = &cli.currency {
        config.currency_label = currency.clone();
    }
    if let Some(dir) = &cli.chart_dir {
        config.chart_dir = dir.clone();
    }
    if cli.no_charts {
        config.render_charts = false;
    }

    config.validate()?;
    Ok(config)
}

fn run(cli: Cli) -> Result<()> {
    let config = build_config(&cli)?;
    debug!(?config, "resolved config");

    let source = match &cli.input {
        Some(path) => DataSource::Csv(path.clone()),
        None => DataSource::Synthetic,
    };

    let analysis = run_analysis(&source, &config)?;

    match cli.command.unwrap_or_default() {
        Command::Report => cmd_report(&analysis, &config),
        Command::Insights { json } => cmd_insights(&analysis, &config, json),
        Command::Tables => cmd_tables(&analysis, &config),
    }
}

/// Charts, then the printed insights.
fn cmd_report(analysis: &WasteAnalysis, config: &ReportConfig) -> Result<()> {
    if config.render_charts {
        let paths = render_charts(
            &config.chart_dir,
            &analysis.meal_wise,
            &analysis.item_wise,
            &analysis.daily,
        )?;
        info!(dir = %config.chart_dir.display(), "charts saved");
        debug!(?paths, "chart files");
    }

    display_insights(&analysis.insights, &config.currency_label);
    Ok(())
}

fn cmd_insights(analysis: &WasteAnalysis, config: &ReportConfig, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(analysis)?);
    } else {
        display_insights(&analysis.insights, &config.currency_label);
    }
    Ok(())
}

fn cmd_tables(analysis: &WasteAnalysis, config: &ReportConfig) -> Result<()> {
    display_insights(&analysis.insights, &config.currency_label);
    display_aggregate_tables(
        &analysis.meal_wise,
        &analysis.item_wise,
        &analysis.daily,
        &config.currency_label,
    );
    Ok(())
}
