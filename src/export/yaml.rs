//! YAML Export functionality

use std::io::Write;

use crate::error::RiskResult;
use crate::export::json::ReportExport;
use crate::forecast::RiskReport;

/// Write the report as YAML with a short header comment
pub fn export_yaml<W: Write>(report: &RiskReport, writer: &mut W) -> RiskResult<()> {
    writeln!(writer, "# ynab-risk report")?;
    if let Some(today) = report.today {
        writeln!(writer, "# Projected from: {}", today)?;
    }
    writeln!(writer, "# Suggestions are advisory; nothing has been moved.")?;
    writeln!(writer)?;

    serde_yaml::to_writer(writer, &ReportExport::new(report))?;
    Ok(())
}
