use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

/// Mess waste analysis: synthesizes dining-hall records and reports where food is wasted.
#[derive(Parser, Debug)]
#[command(name = "mess_waste_analysis")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to a JSON config file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Number of days to generate.
    #[arg(short, long, global = true, allow_negative_numbers = true)]
    pub days: Option<i64>,

    /// Seed for the synthetic data generator.
    #[arg(short, long, global = true)]
    pub seed: Option<u64>,

    /// Analyze a CSV of raw records instead of generating data.
    #[arg(short, long, global = true)]
    pub input: Option<PathBuf>,

    /// Label printed before money amounts.
    #[arg(long, global = true)]
    pub currency: Option<String>,

    /// Directory to write chart images into.
    #[arg(long, global = true)]
    pub chart_dir: Option<PathBuf>,

    /// Skip chart rendering.
    #[arg(long, global = true)]
    pub no_charts: bool,

    /// Increase log verbosity (-v info, -vv debug).
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Render charts and print key insights with recommendations.
    Report,

    /// Print key insights only, no charts.
    Insights {
        /// Emit aggregates and insights as JSON instead of text.
        #[arg(long)]
        json: bool,
    },

    /// Print insights followed by the meal, item and daily aggregate tables.
    Tables,
}

impl Default for Command {
    fn default() -> Self {
        Command::Report
    }
}
