//! CSV Export functionality
//!
//! One row per at-risk account per window. Amounts are raw milliunits so
//! spreadsheets see exact integers.

use chrono::NaiveDate;
use serde::Serialize;
use std::io::Write;

use crate::error::RiskResult;
use crate::forecast::RiskReport;
use crate::models::AccountId;

#[derive(Debug, Serialize)]
struct RiskRow<'a> {
    window_days: u32,
    account_id: AccountId,
    account: &'a str,
    drop_date: Option<NaiveDate>,
    projected_milliunits: i64,
    current_milliunits: i64,
    minimum_milliunits: i64,
}

/// Write at-risk projections for every window as CSV
pub fn export_risk_csv<W: Write>(report: &RiskReport, writer: W) -> RiskResult<()> {
    let mut csv_writer = ::csv::Writer::from_writer(writer);

    for &window in report.projections.keys() {
        for projection in report.at_risk(window) {
            csv_writer.serialize(RiskRow {
                window_days: window.days(),
                account_id: projection.account_id,
                account: &projection.account_name,
                drop_date: projection.first_negative_date,
                projected_milliunits: projection.projected_balance.value(),
                current_milliunits: projection.starting_balance.value(),
                minimum_milliunits: projection.minimum_balance.value(),
            })?;
        }
    }

    csv_writer.flush()?;
    Ok(())
}
