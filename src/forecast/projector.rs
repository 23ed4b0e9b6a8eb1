//! Window projector
//!
//! Walks each account's scheduled occurrences in date order, tracking the
//! running balance and the first date it drops below zero.

use chrono::NaiveDate;
use serde::Serialize;
use std::borrow::Cow;
use std::cmp::Ordering;
use std::collections::HashMap;

use super::occurrence::{occurrences_by_account, Occurrence};
use crate::models::{
    Account, AccountId, Milliunits, ScheduledTransaction, ScheduledTransactionId, Window,
};

/// Running balance after one occurrence posts
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectionStep {
    pub date: NaiveDate,
    pub transaction_id: ScheduledTransactionId,
    pub amount: Milliunits,
    /// Cumulative balance after this step
    pub balance: Milliunits,
}

/// Balance path of one account over one window
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Projection {
    pub account_id: AccountId,
    pub account_name: String,
    pub window: Window,
    /// Balance at the start of the window
    pub starting_balance: Milliunits,
    pub steps: Vec<ProjectionStep>,
    /// Earliest date the running balance is below zero
    pub first_negative_date: Option<NaiveDate>,
    /// Balance once every occurrence in the window has posted
    pub projected_balance: Milliunits,
    /// Lowest balance reached, including the starting balance
    pub minimum_balance: Milliunits,
}

impl Projection {
    /// Project one account given its occurrences sorted by (date, id).
    ///
    /// Occurrences after the window's cutoff are ignored. An account that
    /// starts below zero drops on `today`.
    pub fn for_account(
        account: &Account,
        occurrences: &[Occurrence],
        window: Window,
        today: NaiveDate,
    ) -> Self {
        let starting_balance = account.balance;
        let mut balance = starting_balance;
        let mut minimum_balance = starting_balance;
        let mut first_negative_date = starting_balance.is_negative().then_some(today);
        let mut steps = Vec::new();

        for occurrence in occurrences
            .iter()
            .filter(|o| window.contains(today, o.date))
        {
            balance += occurrence.amount;
            minimum_balance = minimum_balance.min(balance);
            if balance.is_negative() && first_negative_date.is_none() {
                first_negative_date = Some(occurrence.date);
            }
            steps.push(ProjectionStep {
                date: occurrence.date,
                transaction_id: occurrence.transaction_id,
                amount: occurrence.amount,
                balance,
            });
        }

        Self {
            account_id: account.id,
            account_name: account.name.clone(),
            window,
            starting_balance,
            steps,
            first_negative_date,
            projected_balance: balance,
            minimum_balance,
        }
    }

    /// True when the balance goes below zero inside the window
    pub fn is_at_risk(&self) -> bool {
        self.first_negative_date.is_some()
    }

    /// True when at least one occurrence falls inside the window
    pub fn has_occurrences(&self) -> bool {
        !self.steps.is_empty()
    }

    /// Balance at the end of `date`
    pub fn balance_on(&self, date: NaiveDate) -> Milliunits {
        self.steps
            .iter()
            .take_while(|step| step.date <= date)
            .last()
            .map_or(self.starting_balance, |step| step.balance)
    }
}

/// Report ordering: at-risk accounts first, most negative projected balance
/// first, then earliest drop; safe accounts after, by name.
pub fn report_order(a: &Projection, b: &Projection) -> Ordering {
    match (a.first_negative_date, b.first_negative_date) {
        (Some(a_date), Some(b_date)) => a
            .projected_balance
            .cmp(&b.projected_balance)
            .then_with(|| a_date.cmp(&b_date)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
    .then_with(|| a.account_name.cmp(&b.account_name))
    .then_with(|| a.account_id.cmp(&b.account_id))
}

/// Projects a fixed snapshot over any window up to a horizon
///
/// Occurrences are expanded once, up to the horizon's cutoff, and shared by
/// every window projected afterwards. A window longer than the horizon gets
/// its own expansion.
pub struct WindowProjector<'a> {
    accounts: &'a [Account],
    scheduled: &'a [ScheduledTransaction],
    occurrences: HashMap<AccountId, Vec<Occurrence>>,
    horizon: Window,
    today: NaiveDate,
}

impl<'a> WindowProjector<'a> {
    /// Create a projector sharing one expansion for windows up to `horizon`
    pub fn new(
        accounts: &'a [Account],
        scheduled: &'a [ScheduledTransaction],
        horizon: Window,
        today: NaiveDate,
    ) -> Self {
        let occurrences = occurrences_by_account(scheduled, today, horizon.cutoff(today));
        Self {
            accounts,
            scheduled,
            occurrences,
            horizon,
            today,
        }
    }

    /// Project every account, including those with no occurrences
    pub fn project_all(&self, window: Window) -> Vec<Projection> {
        let occurrences = if window <= self.horizon {
            Cow::Borrowed(&self.occurrences)
        } else {
            tracing::debug!(
                window = window.days(),
                horizon = self.horizon.days(),
                "window beyond horizon, expanding again"
            );
            Cow::Owned(occurrences_by_account(
                self.scheduled,
                self.today,
                window.cutoff(self.today),
            ))
        };
        self.accounts
            .iter()
            .map(|account| {
                let occurrences = occurrences
                    .get(&account.id)
                    .map(Vec::as_slice)
                    .unwrap_or_default();
                Projection::for_account(account, occurrences, window, self.today)
            })
            .collect()
    }

    /// Project the accounts with at least one occurrence in `window`, in
    /// report order
    pub fn project(&self, window: Window) -> Vec<Projection> {
        let mut projections: Vec<Projection> = self
            .project_all(window)
            .into_iter()
            .filter(Projection::has_occurrences)
            .collect();
        projections.sort_by(report_order);
        tracing::debug!(
            window = window.days(),
            reported = projections.len(),
            at_risk = projections.iter().filter(|p| p.is_at_risk()).count(),
            "projected window"
        );
        projections
    }
}

/// Project a snapshot over a single window, in report order
pub fn project(
    accounts: &[Account],
    scheduled: &[ScheduledTransaction],
    window: Window,
    today: NaiveDate,
) -> Vec<Projection> {
    WindowProjector::new(accounts, scheduled, window, today).project(window)
}
