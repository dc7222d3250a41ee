use std::path::PathBuf;

use thiserror::Error;

use crate::app::services::encoding::TextEncoding;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// None of the candidate encodings could decode the file.
    #[error("Could not determine file encoding of {} (tried {})", path.display(), describe(tried))]
    EncodingExhausted {
        path: PathBuf,
        tried: Vec<TextEncoding>,
    },

    #[error("Settings error: {0}")]
    Settings(String),
}

fn describe(tried: &[TextEncoding]) -> String {
    tried
        .iter()
        .map(|e| e.label())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Convenience type alias for Results with AppError
pub type Result<T> = std::result::Result<T, AppError>;
