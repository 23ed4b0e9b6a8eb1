//! Configuration module for ynab-risk
//!
//! This module provides configuration management including:
//! - `.env` loading that never overrides the real environment
//! - the explicit `Settings` struct handed to the fetcher
//! - redacted handling of the API token

pub mod secret;
pub mod settings;

use std::path::Path;

use crate::error::{RiskError, RiskResult};

pub use secret::ApiToken;
pub use settings::{parse_today, Settings, DEFAULT_API_BASE, DEFAULT_BUDGET_ID};

/// Default dotenv file, relative to the working directory
pub const DOTENV_PATH: &str = ".env";

/// Load `KEY=VALUE` pairs from a dotenv file into the process environment.
///
/// Variables that are already set keep their value. A missing file is not
/// an error; returns whether a file was read.
pub fn load_dotenv(path: impl AsRef<Path>) -> RiskResult<bool> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(false);
    }
    dotenvy::from_path(path)
        .map_err(|e| RiskError::Config(format!("Failed to load {}: {}", path.display(), e)))?;
    Ok(true)
}
