//! Expansion of scheduled transactions into dated occurrences
//!
//! Recurring schedules are open-ended, so expansion is lazy and always
//! bounded by a cutoff date.

use chrono::NaiveDate;
use std::collections::HashMap;

use crate::models::{AccountId, Frequency, Milliunits, ScheduledTransaction, ScheduledTransactionId};

/// One concrete posting of a scheduled transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Occurrence {
    pub date: NaiveDate,
    pub transaction_id: ScheduledTransactionId,
    pub account_id: AccountId,
    pub amount: Milliunits,
}

/// Iterator over the dates of one schedule inside `[today, cutoff]`
///
/// Dates before `today` are stepped over without being yielded, so a stale
/// `date_next` still rolls forward into the window. Iteration stops at the
/// first date past `cutoff` or when the rule stops advancing.
#[derive(Debug, Clone)]
pub struct OccurrenceDates {
    next: Option<NaiveDate>,
    frequency: Frequency,
    today: NaiveDate,
    cutoff: NaiveDate,
}

impl OccurrenceDates {
    pub fn new(start: NaiveDate, frequency: Frequency, today: NaiveDate, cutoff: NaiveDate) -> Self {
        Self {
            next: Some(start),
            frequency,
            today,
            cutoff,
        }
    }
}

impl Iterator for OccurrenceDates {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<NaiveDate> {
        loop {
            let current = self.next?;
            if current > self.cutoff {
                self.next = None;
                return None;
            }
            self.next = self
                .frequency
                .next_date(current)
                .filter(|following| *following > current);
            if current >= self.today {
                return Some(current);
            }
        }
    }
}

/// Lazily expand one scheduled transaction into its occurrences
pub fn occurrences_of(
    txn: &ScheduledTransaction,
    today: NaiveDate,
    cutoff: NaiveDate,
) -> impl Iterator<Item = Occurrence> + '_ {
    OccurrenceDates::new(txn.date_next, txn.frequency, today, cutoff).map(move |date| Occurrence {
        date,
        transaction_id: txn.id,
        account_id: txn.account_id,
        amount: txn.amount,
    })
}

/// Expand every schedule and group the occurrences per account.
///
/// Each account's list is sorted by date, ties broken by transaction id.
pub fn occurrences_by_account(
    scheduled: &[ScheduledTransaction],
    today: NaiveDate,
    cutoff: NaiveDate,
) -> HashMap<AccountId, Vec<Occurrence>> {
    let mut by_account: HashMap<AccountId, Vec<Occurrence>> = HashMap::new();
    for txn in scheduled {
        for occurrence in occurrences_of(txn, today, cutoff) {
            by_account
                .entry(occurrence.account_id)
                .or_default()
                .push(occurrence);
        }
    }
    for occurrences in by_account.values_mut() {
        occurrences.sort_by(|a, b| {
            a.date
                .cmp(&b.date)
                .then_with(|| a.transaction_id.cmp(&b.transaction_id))
        });
    }
    by_account
}
