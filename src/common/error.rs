use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImportError {
    #[error("row {row}: column '{column}' contains non-numeric value '{value}'")]
    InvalidNumber {
        row: u64,
        column: String,
        value: String,
    },

    #[error("row {row}: column '{column}' is empty but a value is required")]
    MissingValue { row: u64, column: String },

    #[error("required column missing from export header: {0}")]
    MissingColumn(String),

    #[error("CSV read failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("import cancelled before completion")]
    Cancelled,
}

pub type Result<T> = std::result::Result<T, ImportError>;
