use thiserror::Error;

/// Errors raised by the persistence, interchange and settings layers.
///
/// The milestone store itself never fails; everything here comes from I/O
/// around it and ends up in the status bar or a toast.
#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid project file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("CSV is missing required columns (found {found:?}); need a title and a due date")]
    MissingColumns { found: Vec<String> },

    #[error("no valid milestones found in CSV ({skipped} rows skipped)")]
    NoRows { skipped: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
