//! Balance forecasting
//!
//! Pure computation over an immutable snapshot: expand scheduled
//! transactions, project each window, then suggest cover transfers against
//! the largest window. No I/O happens here and every input is valid.

pub mod occurrence;
pub mod projector;
pub mod suggester;

use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;

use crate::models::{Account, ScheduledTransaction, Window, WindowSet};

pub use occurrence::{occurrences_by_account, Occurrence, OccurrenceDates};
pub use projector::{project, Projection, ProjectionStep, WindowProjector};
pub use suggester::{suggest, SuggestionPlan, TransferSuggestion, UncoveredShortfall};

/// Everything the reporter needs from one run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RiskReport {
    pub today: Option<NaiveDate>,
    /// Per-window projections in report order
    pub projections: BTreeMap<Window, Vec<Projection>>,
    /// The window suggestions were computed against
    pub suggestion_window: Option<Window>,
    pub suggestions: SuggestionPlan,
}

impl RiskReport {
    /// At-risk projections for one window
    pub fn at_risk(&self, window: Window) -> impl Iterator<Item = &Projection> {
        self.projections
            .get(&window)
            .into_iter()
            .flatten()
            .filter(|p| p.is_at_risk())
    }

    /// True when any window has an account dropping below zero
    pub fn has_risk(&self) -> bool {
        self.projections
            .values()
            .flatten()
            .any(Projection::is_at_risk)
    }
}

/// Runs projections and suggestions for a set of windows
pub struct Forecast;

impl Forecast {
    /// Project every window and build suggestions from the largest one.
    ///
    /// An empty window set does no work and yields an empty report.
    pub fn run(
        accounts: &[Account],
        scheduled: &[ScheduledTransaction],
        windows: &WindowSet,
        today: NaiveDate,
    ) -> RiskReport {
        let Some(largest) = windows.largest() else {
            return RiskReport::default();
        };

        let projector = WindowProjector::new(accounts, scheduled, largest, today);
        let projections: BTreeMap<Window, Vec<Projection>> = windows
            .iter()
            .map(|window| (window, projector.project(window)))
            .collect();
        let suggestions = suggest(&projector.project_all(largest));

        tracing::info!(
            accounts = accounts.len(),
            scheduled = scheduled.len(),
            windows = %windows,
            transfers = suggestions.transfers.len(),
            "forecast complete"
        );

        RiskReport {
            today: Some(today),
            projections,
            suggestion_window: Some(largest),
            suggestions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Milliunits, ScheduledTransaction};
    use chrono::Days;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
    }

    fn day(n: u64) -> NaiveDate {
        today().checked_add_days(Days::new(n)).unwrap()
    }

    fn units(n: i64) -> Milliunits {
        Milliunits::from_units(n)
    }

    #[test]
    fn test_empty_window_set_returns_empty_report() {
        let account = Account::new("A", units(-1));
        let windows = WindowSet::from_days(std::iter::empty()).unwrap();

        let report = Forecast::run(&[account], &[], &windows, today());
        assert_eq!(report, RiskReport::default());
    }

    #[test]
    fn test_no_accounts_is_not_an_error() {
        let windows = WindowSet::parse("3,7").unwrap();
        let report = Forecast::run(&[], &[], &windows, today());
        assert!(!report.has_risk());
        assert!(report.suggestions.is_empty());
        assert_eq!(report.projections.len(), 2);
    }

    #[test]
    fn test_suggestions_use_largest_window_only() {
        let late = Account::new("Late", units(10));
        let source = Account::new("Source", units(100));
        let scheduled = vec![ScheduledTransaction::new(late.id, units(-30), day(20))];
        let windows = WindowSet::parse("3,7,30").unwrap();

        let report = Forecast::run(&[late.clone(), source], &scheduled, &windows, today());

        assert_eq!(report.suggestion_window.map(|w| w.days()), Some(30));
        assert_eq!(report.at_risk(Window::new(7).unwrap()).count(), 0);
        assert_eq!(report.at_risk(Window::new(30).unwrap()).count(), 1);
        assert_eq!(report.suggestions.covered_amount(late.id), units(20));
    }

    #[test]
    fn test_risk_is_monotonic_across_windows() {
        let account = Account::new("A", units(5));
        let scheduled = vec![ScheduledTransaction::new(account.id, units(-10), day(2))];
        let windows = WindowSet::parse("3,7,30").unwrap();

        let report = Forecast::run(&[account], &scheduled, &windows, today());
        let drops: Vec<_> = windows
            .iter()
            .map(|w| report.at_risk(w).next().and_then(|p| p.first_negative_date))
            .collect();
        assert_eq!(drops, vec![Some(day(2)); 3]);
    }

    #[test]
    fn test_positive_idle_account_never_at_risk() {
        let account = Account::new("Idle", units(5));
        let windows = WindowSet::parse("3,7,30").unwrap();

        let report = Forecast::run(&[account], &[], &windows, today());
        assert!(!report.has_risk());
        assert!(report.projections.values().all(Vec::is_empty));
    }

    #[test]
    fn test_run_with_extreme_balances() {
        let rich = Account::new("Rich", Milliunits::new(i64::MAX));
        let also_rich = Account::new("AlsoRich", Milliunits::new(i64::MAX));
        let short = Account::new("Short", units(0));
        let scheduled = vec![
            ScheduledTransaction::new(rich.id, Milliunits::new(1), today()),
            ScheduledTransaction::new(short.id, units(-10), day(1)),
        ];
        let windows = WindowSet::parse("3").unwrap();

        let report = Forecast::run(&[rich, also_rich, short.clone()], &scheduled, &windows, today());

        assert_eq!(report.suggestions.covered_amount(short.id), units(10));
        assert!(report.suggestions.uncovered.is_empty());
    }
}
