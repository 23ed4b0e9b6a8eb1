//! Budget data sources
//!
//! The forecast only ever sees the typed snapshot a `BudgetSource` hands
//! back. `YnabClient` reads it from the live API; `Snapshot` reads it from a
//! JSON file.

pub mod client;
pub mod snapshot;
pub mod wire;

use crate::error::RiskResult;
use crate::models::{Account, ScheduledTransaction};

pub use client::YnabClient;
pub use snapshot::Snapshot;

/// Supplies the accounts and schedules for one budget
pub trait BudgetSource {
    /// On-budget, non-debt accounts with their current balances
    fn accounts(&self) -> RiskResult<Vec<Account>>;

    /// Live scheduled transactions
    fn scheduled_transactions(&self) -> RiskResult<Vec<ScheduledTransaction>>;
}
