//! Error types for the neo-seeker crate.

use thiserror::Error;

/// Errors that can occur when building or evaluating filters.
#[derive(Debug, Error)]
pub enum FilterError {
    /// A filter without an attribute accessor was evaluated.
    #[error("unsupported criterion: {criterion} does not provide an attribute accessor")]
    UnsupportedCriterion { criterion: &'static str },

    /// A signed result limit was negative.
    #[error("result limit must not be negative, got {0}")]
    NegativeLimit(i64),

    /// A lower bound is greater than its upper bound.
    #[error("invalid {criterion} range: {min} is greater than {max}")]
    InvalidRange {
        criterion: &'static str,
        min: String,
        max: String,
    },

    /// Malformed JSON criteria document.
    #[error("invalid criteria JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Malformed YAML criteria document.
    #[error("invalid criteria YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Result type for neo-seeker operations.
pub type Result<T> = std::result::Result<T, FilterError>;
