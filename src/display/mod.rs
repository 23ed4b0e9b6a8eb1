//! Display formatting for terminal output
//!
//! Renders a `RiskReport` as the human-readable report printed by default.

pub mod report;
pub mod risk;
pub mod transfer;

use crate::forecast::RiskReport;
use crate::models::Milliunits;

pub use risk::format_risk_windows;
pub use transfer::format_transfers;

/// How amounts are rendered
#[derive(Debug, Clone)]
pub struct DisplayOptions {
    pub currency_symbol: String,
    /// Highlight negative amounts with ANSI colors
    pub color: bool,
}

impl DisplayOptions {
    /// Options without color
    pub fn plain(currency_symbol: impl Into<String>) -> Self {
        Self {
            currency_symbol: currency_symbol.into(),
            color: false,
        }
    }

    pub fn money(&self, amount: Milliunits) -> String {
        if self.color {
            report::format_money_colored(amount, &self.currency_symbol)
        } else {
            amount.format_with_symbol(&self.currency_symbol)
        }
    }
}

/// Full terminal report: risk windows followed by transfer suggestions
pub fn format_report(report: &RiskReport, options: &DisplayOptions) -> String {
    let mut output = format_risk_windows(report, options);
    if report.suggestion_window.is_some() {
        output.push('\n');
        output.push_str(&format_transfers(&report.suggestions, options));
    }
    output
}
