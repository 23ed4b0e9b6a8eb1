//! At-risk account listing, one section per window

use super::report::underlined;
use super::DisplayOptions;
use crate::forecast::{Projection, RiskReport};

/// Message printed when no window has an account at risk
pub const ALL_CLEAR: &str = "All accounts stay non-negative in the selected windows.";

fn format_entry(projection: &Projection, options: &DisplayOptions) -> String {
    let drop = projection
        .first_negative_date
        .map_or_else(|| "n/a".to_string(), |d| d.to_string());
    format!(
        "{}: drop {}, projected {} (current {})\n",
        projection.account_name,
        drop,
        options.money(projection.projected_balance),
        options.money(projection.starting_balance),
    )
}

/// Format every window's at-risk accounts
pub fn format_risk_windows(report: &RiskReport, options: &DisplayOptions) -> String {
    let mut output = String::new();

    for &window in report.projections.keys() {
        output.push_str(&underlined(&format!(
            "Accounts at risk within {} days",
            window.days()
        )));

        let mut any = false;
        for projection in report.at_risk(window) {
            any = true;
            output.push_str(&format_entry(projection, options));
        }
        if !any {
            output.push_str("None\n");
        }
        output.push('\n');
    }

    if !report.has_risk() {
        output.push_str(ALL_CLEAR);
        output.push('\n');
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forecast::Forecast;
    use crate::models::{Account, Milliunits, ScheduledTransaction, WindowSet};
    use chrono::NaiveDate;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
    }

    #[test]
    fn test_lists_at_risk_accounts_per_window() {
        let x = Account::new("Joint", Milliunits::from_units(100));
        let scheduled = vec![ScheduledTransaction::new(
            x.id,
            Milliunits::from_units(-150),
            NaiveDate::from_ymd_opt(2025, 6, 6).unwrap(),
        )];
        let windows = WindowSet::parse("3,7").unwrap();
        let report = Forecast::run(&[x], &scheduled, &windows, today());

        let text = format_risk_windows(&report, &DisplayOptions::plain("£"));
        let rule = "-".repeat(30);
        assert!(text.starts_with(&format!(
            "Accounts at risk within 3 days\n{}\nNone\n",
            rule
        )));
        assert!(text.contains(&format!(
            "Accounts at risk within 7 days\n{}\nJoint: drop 2025-06-06, projected -£50.00 (current £100.00)\n",
            rule
        )));
        assert!(!text.contains(ALL_CLEAR));
    }

    #[test]
    fn test_all_clear_message() {
        let windows = WindowSet::parse("3").unwrap();
        let report = Forecast::run(&[], &[], &windows, today());

        let text = format_risk_windows(&report, &DisplayOptions::plain("£"));
        assert!(text.ends_with(&format!("None\n\n{}\n", ALL_CLEAR)));
    }
}
