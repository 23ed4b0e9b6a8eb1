//! Scheduled transaction model
//!
//! A planned, possibly recurring inflow or outflow against one account.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::frequency::Frequency;
use super::ids::{AccountId, ScheduledTransactionId};
use super::money::Milliunits;

/// A future-dated transaction with an optional recurrence rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledTransaction {
    /// Unique identifier
    pub id: ScheduledTransactionId,

    /// Account the transaction posts to
    pub account_id: AccountId,

    /// Signed amount (negative = outflow)
    pub amount: Milliunits,

    /// Next date the transaction occurs
    pub date_next: NaiveDate,

    /// Recurrence rule
    #[serde(default)]
    pub frequency: Frequency,

    /// Payee, for display only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payee_name: Option<String>,
}

impl ScheduledTransaction {
    /// Create a one-off scheduled transaction
    pub fn new(account_id: AccountId, amount: Milliunits, date_next: NaiveDate) -> Self {
        Self {
            id: ScheduledTransactionId::new(),
            account_id,
            amount,
            date_next,
            frequency: Frequency::Never,
            payee_name: None,
        }
    }

    /// Set the recurrence rule
    pub fn repeating(mut self, frequency: Frequency) -> Self {
        self.frequency = frequency;
        self
    }
}
