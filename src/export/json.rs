//! JSON Export functionality
//!
//! Serializes a risk report with schema versioning.

use serde::Serialize;
use std::io::Write;

use crate::error::RiskResult;
use crate::forecast::RiskReport;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Report wrapper carrying version metadata
#[derive(Debug, Clone, Serialize)]
pub struct ReportExport<'a> {
    /// Schema version for compatibility checking
    pub schema_version: &'static str,

    /// Application version that produced the export
    pub app_version: &'static str,

    #[serde(flatten)]
    pub report: &'a RiskReport,
}

impl<'a> ReportExport<'a> {
    pub fn new(report: &'a RiskReport) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION,
            app_version: env!("CARGO_PKG_VERSION"),
            report,
        }
    }
}

/// Write the report as pretty-printed JSON
pub fn export_json<W: Write>(report: &RiskReport, writer: &mut W) -> RiskResult<()> {
    serde_json::to_writer_pretty(&mut *writer, &ReportExport::new(report))?;
    writeln!(writer)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forecast::Forecast;
    use crate::models::{Account, Milliunits, ScheduledTransaction, WindowSet};
    use chrono::NaiveDate;

    #[test]
    fn test_json_export_shape() {
        let today = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let x = Account::new("X", Milliunits::from_units(100));
        let y = Account::new("Y", Milliunits::from_units(500));
        let scheduled = vec![ScheduledTransaction::new(
            x.id,
            Milliunits::from_units(-150),
            NaiveDate::from_ymd_opt(2025, 6, 6).unwrap(),
        )];
        let windows = WindowSet::parse("3,7").unwrap();
        let report = Forecast::run(&[x, y], &scheduled, &windows, today);

        let mut buffer = Vec::new();
        export_json(&report, &mut buffer).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();

        assert_eq!(value["schema_version"], EXPORT_SCHEMA_VERSION);
        assert_eq!(value["today"], "2025-06-01");
        assert_eq!(value["suggestion_window"], 7);
        assert_eq!(value["projections"]["3"].as_array().unwrap().len(), 0);
        let seven = &value["projections"]["7"][0];
        assert_eq!(seven["account_name"], "X");
        assert_eq!(seven["first_negative_date"], "2025-06-06");
        assert_eq!(seven["projected_balance"], -50_000);
        let transfer = &value["suggestions"]["transfers"][0];
        assert_eq!(transfer["from_name"], "Y");
        assert_eq!(transfer["amount"], 50_000);
    }
}
