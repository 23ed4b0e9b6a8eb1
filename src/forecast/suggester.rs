//! Transfer suggester
//!
//! Pairs accounts that stay positive over the longest window with accounts
//! that drop below zero, and proposes moves that fully cover each drop.
//! Nothing is ever executed; the plan is advisory output only.
//!
//! Deficits are grouped by drop date and handled earliest first. A group is
//! covered only when the pooled remaining surplus can meet the whole group's
//! need; otherwise every account in it is reported as uncovered and the
//! surplus is left for later groups. Partial coverage is never suggested.

use chrono::NaiveDate;
use serde::Serialize;

use super::projector::Projection;
use crate::models::{AccountId, Milliunits};

/// A proposed move of cash between two accounts
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransferSuggestion {
    pub from_account: AccountId,
    pub from_name: String,
    pub to_account: AccountId,
    pub to_name: String,
    pub amount: Milliunits,
    /// Drop date of the destination this move covers
    pub covers_drop_on: NaiveDate,
}

impl TransferSuggestion {
    pub fn rationale(&self) -> String {
        format!("covers drop on {}", self.covers_drop_on)
    }
}

/// Deficit accounts sharing a drop date that could not be fully covered
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UncoveredShortfall {
    pub drop_date: NaiveDate,
    /// Total need across the group
    pub need: Milliunits,
    /// Surplus remaining when the group was considered
    pub available: Milliunits,
    pub accounts: Vec<AccountId>,
    pub account_names: Vec<String>,
}

/// Output of one suggestion pass
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SuggestionPlan {
    pub transfers: Vec<TransferSuggestion>,
    pub uncovered: Vec<UncoveredShortfall>,
}

impl SuggestionPlan {
    /// Every account left without a covering transfer
    pub fn uncovered_accounts(&self) -> Vec<AccountId> {
        self.uncovered
            .iter()
            .flat_map(|shortfall| shortfall.accounts.iter().copied())
            .collect()
    }

    /// Sum of suggested transfers into `account`
    pub fn covered_amount(&self, account: AccountId) -> Milliunits {
        self.transfers
            .iter()
            .filter(|t| t.to_account == account)
            .map(|t| t.amount)
            .sum()
    }

    /// Sum of suggested transfers out of `account`
    pub fn given_amount(&self, account: AccountId) -> Milliunits {
        self.transfers
            .iter()
            .filter(|t| t.from_account == account)
            .map(|t| t.amount)
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.transfers.is_empty() && self.uncovered.is_empty()
    }
}

struct Surplus<'a> {
    account_id: AccountId,
    name: &'a str,
    available: Milliunits,
}

struct Deficit<'a> {
    account_id: AccountId,
    name: &'a str,
    need: Milliunits,
    drop_date: NaiveDate,
}

/// Build a suggestion plan from every account's projection over the
/// largest window, idle accounts included.
///
/// Only accounts with occurrences in the window can receive a transfer.
pub fn suggest(projections: &[Projection]) -> SuggestionPlan {
    // Available cash is the minimum balance: giving up that much keeps the
    // source at or above zero on every day of the window.
    let mut surpluses: Vec<Surplus> = projections
        .iter()
        .filter(|p| !p.is_at_risk() && p.minimum_balance.is_positive())
        .map(|p| Surplus {
            account_id: p.account_id,
            name: &p.account_name,
            available: p.minimum_balance,
        })
        .collect();
    surpluses.sort_by(|a, b| {
        b.available
            .cmp(&a.available)
            .then_with(|| a.name.cmp(b.name))
            .then_with(|| a.account_id.cmp(&b.account_id))
    });

    // Idle accounts may fund transfers but are never destinations.
    let mut deficits: Vec<Deficit> = projections
        .iter()
        .filter(|p| p.has_occurrences())
        .filter_map(|p| {
            p.first_negative_date.map(|drop_date| Deficit {
                account_id: p.account_id,
                name: &p.account_name,
                need: -p.minimum_balance,
                drop_date,
            })
        })
        .collect();
    deficits.sort_by(|a, b| {
        a.drop_date
            .cmp(&b.drop_date)
            .then_with(|| b.need.cmp(&a.need))
            .then_with(|| a.account_id.cmp(&b.account_id))
    });

    let mut plan = SuggestionPlan::default();
    for group in deficits.chunk_by(|a, b| a.drop_date == b.drop_date) {
        let drop_date = group[0].drop_date;
        let total_need: Milliunits = group.iter().map(|d| d.need).sum();
        let pool: Milliunits = surpluses.iter().map(|s| s.available).sum();

        if pool < total_need {
            tracing::debug!(
                %drop_date,
                need = total_need.value(),
                available = pool.value(),
                "shortfall group left uncovered"
            );
            plan.uncovered.push(UncoveredShortfall {
                drop_date,
                need: total_need,
                available: pool,
                accounts: group.iter().map(|d| d.account_id).collect(),
                account_names: group.iter().map(|d| d.name.to_string()).collect(),
            });
            continue;
        }

        for deficit in group {
            let mut remaining = deficit.need;
            for source in surpluses.iter_mut() {
                if !remaining.is_positive() {
                    break;
                }
                if !source.available.is_positive() {
                    continue;
                }
                let amount = remaining.min(source.available);
                source.available -= amount;
                remaining -= amount;
                plan.transfers.push(TransferSuggestion {
                    from_account: source.account_id,
                    from_name: source.name.to_string(),
                    to_account: deficit.account_id,
                    to_name: deficit.name.to_string(),
                    amount,
                    covers_drop_on: drop_date,
                });
            }
        }
    }

    tracing::debug!(
        transfers = plan.transfers.len(),
        uncovered_groups = plan.uncovered.len(),
        "suggestion pass complete"
    );
    plan
}
