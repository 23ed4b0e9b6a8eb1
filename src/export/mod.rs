//! Export module for ynab-risk
//!
//! Provides machine-readable report output in multiple formats:
//! - JSON: the full report, for scripts and dashboards
//! - YAML: the full report, human-readable
//! - CSV: one row per at-risk account and window (spreadsheet-compatible)

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::export_risk_csv;
pub use self::json::{export_json, ReportExport, EXPORT_SCHEMA_VERSION};
pub use self::yaml::export_yaml;
