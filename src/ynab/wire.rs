//! YNAB API payloads
//!
//! Only the fields the forecast uses are modelled; everything else in the
//! responses is ignored. Conversion into the domain models applies the
//! cash-account and deleted-record filters.

use chrono::NaiveDate;
use serde::Deserialize;

use crate::models::{
    Account, AccountId, AccountType, Frequency, Milliunits, ScheduledTransaction,
    ScheduledTransactionId,
};

/// Every YNAB response wraps its payload in `{"data": ...}`
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
}

#[derive(Debug, Deserialize)]
pub struct AccountsData {
    #[serde(default)]
    pub accounts: Vec<WireAccount>,
}

#[derive(Debug, Deserialize)]
pub struct ScheduledTransactionsData {
    #[serde(default)]
    pub scheduled_transactions: Vec<WireScheduledTransaction>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WireAccount {
    pub id: AccountId,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type", default)]
    pub account_type: AccountType,
    #[serde(default = "default_true")]
    pub on_budget: bool,
    #[serde(default)]
    pub closed: bool,
    #[serde(default)]
    pub deleted: bool,
    #[serde(default)]
    pub balance: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WireSubtransaction {
    #[serde(default)]
    pub amount: i64,
    #[serde(default)]
    pub deleted: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WireScheduledTransaction {
    pub id: ScheduledTransactionId,
    pub date_next: NaiveDate,
    #[serde(default)]
    pub frequency: Frequency,
    #[serde(default)]
    pub amount: i64,
    #[serde(default)]
    pub account_id: Option<AccountId>,
    #[serde(default)]
    pub payee_name: Option<String>,
    #[serde(default)]
    pub deleted: bool,
    #[serde(default, alias = "scheduled_subtransactions")]
    pub subtransactions: Vec<WireSubtransaction>,
}

fn default_true() -> bool {
    true
}

impl WireAccount {
    /// Open accounts that are on-budget and not debt
    pub fn into_cash_account(self) -> Option<Account> {
        if self.deleted || self.closed {
            return None;
        }
        let account = Account {
            id: self.id,
            name: self.name,
            account_type: self.account_type,
            on_budget: self.on_budget,
            balance: Milliunits::new(self.balance),
        };
        account.is_cash_account().then_some(account)
    }
}

impl WireScheduledTransaction {
    /// Split transactions post the sum of their live subtransactions
    pub fn effective_amount(&self) -> i64 {
        let live: Vec<i64> = self
            .subtransactions
            .iter()
            .filter(|sub| !sub.deleted)
            .map(|sub| sub.amount)
            .collect();
        if live.is_empty() {
            self.amount
        } else {
            live.iter().sum()
        }
    }

    pub fn into_scheduled(self) -> Option<ScheduledTransaction> {
        if self.deleted {
            return None;
        }
        let amount = Milliunits::new(self.effective_amount());
        Some(ScheduledTransaction {
            id: self.id,
            account_id: self.account_id?,
            amount,
            date_next: self.date_next,
            frequency: self.frequency,
            payee_name: self.payee_name,
        })
    }
}

/// Convert an accounts payload into the cash accounts the forecast uses
pub fn cash_accounts(data: AccountsData) -> Vec<Account> {
    data.accounts
        .into_iter()
        .filter_map(WireAccount::into_cash_account)
        .collect()
}

/// Convert a scheduled transactions payload, dropping unusable records
pub fn scheduled_transactions(data: ScheduledTransactionsData) -> Vec<ScheduledTransaction> {
    data.scheduled_transactions
        .into_iter()
        .filter_map(WireScheduledTransaction::into_scheduled)
        .collect()
}
