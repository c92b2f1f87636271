pub mod charts;
pub mod render;

pub use charts::{render_charts, ChartPaths};
pub use render::{
    display_aggregate_tables, display_insights, format_aggregate_tables, format_insights,
};
