//! Custom error types for ynab-risk
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions. The projection and suggestion core is
//! total and never produces these; they come from input parsing, the data
//! fetcher and the output layer.

use thiserror::Error;

/// The main error type for ynab-risk operations
#[derive(Error, Debug)]
pub enum RiskError {
    /// A window value that is not a positive day count
    #[error("Invalid window: {0}")]
    InvalidWindow(String),

    /// No windows were supplied
    #[error("No windows supplied")]
    EmptyWindowSet,

    /// Configuration-related errors (missing token, bad dates, ...)
    #[error("Configuration error: {0}")]
    Config(String),

    /// The budgeting API answered with a non-success status
    #[error("YNAB API request failed ({status}): {body}")]
    Api { status: u16, body: String },

    /// Transport-level HTTP errors
    #[error("HTTP error: {0}")]
    Http(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// YAML serialization errors
    #[error("YAML error: {0}")]
    Yaml(String),

    /// CSV serialization errors
    #[error("CSV error: {0}")]
    Csv(String),
}

impl RiskError {
    /// Create an "invalid window" error for the offending token
    pub fn invalid_window(token: impl Into<String>) -> Self {
        Self::InvalidWindow(token.into())
    }

    /// Check if this is an invalid window error
    pub fn is_invalid_window(&self) -> bool {
        matches!(self, Self::InvalidWindow(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for RiskError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for RiskError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<serde_yaml::Error> for RiskError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Yaml(err.to_string())
    }
}

impl From<csv::Error> for RiskError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err.to_string())
    }
}

impl From<reqwest::Error> for RiskError {
    fn from(err: reqwest::Error) -> Self {
        Self::Http(err.to_string())
    }
}

/// Result type alias for ynab-risk operations
pub type RiskResult<T> = Result<T, RiskError>;
