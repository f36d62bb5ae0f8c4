//! FILENAME: summary-provider/src/error.rs

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("no summary available for period {year}-{month:02}")]
    PeriodNotFound { year: i32, month: u32 },
}
