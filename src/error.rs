//! Error types for review

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the review application
#[derive(Debug, Error)]
pub enum ReviewError {
    #[error("Review store not found: {0}")]
    StoreNotFound(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid review store JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid date: {0}")]
    DateParse(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),
}

impl ReviewError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            ReviewError::StoreNotFound(_) => 2,
            ReviewError::Json(_) | ReviewError::DateParse(_) => 3,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            ReviewError::StoreNotFound(path) => {
                format!(
                    "Review store not found: {}\n\n\
                    Suggestions:\n\
                    • Run 'review init' to create an empty store\n\
                    • Pass an existing store with --file <PATH>\n\
                    • Set REVIEW_FILE (or store_path in review.toml) to your store",
                    path.display()
                )
            }
            ReviewError::DateParse(value) => {
                format!(
                    "Invalid date: {}\n\n\
                    Expected format: DD-MM-YYYY\n\
                    Example: \"createdAt\": \"20-08-2025\"",
                    value
                )
            }
            ReviewError::Json(err) => {
                format!(
                    "Invalid review store JSON: {}\n\n\
                    The store must be a JSON array of reviews, e.g.\n\
                    [{{\"createdAt\": \"20-08-2025\", \"questions\": []}}]",
                    err
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using ReviewError
pub type Result<T> = std::result::Result<T, ReviewError>;
