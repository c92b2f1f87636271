use thiserror::Error;

#[derive(Debug, Error)]
pub enum WasteError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Empty dataset: no records to aggregate")]
    EmptyDataset,

    #[error("Invalid record on line {line}: {reason}")]
    InvalidRecord { line: usize, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Chart error: {0}")]
    Chart(String),
}

pub type Result<T> = std::result::Result<T, WasteError>;
