//! Offline budget snapshots
//!
//! A snapshot is the fetched data saved as JSON, so a run can be repeated
//! or inspected without calling the API.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use super::BudgetSource;
use crate::error::{RiskError, RiskResult};
use crate::models::{Account, ScheduledTransaction};

/// Accounts and scheduled transactions captured at one moment
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub accounts: Vec<Account>,
    #[serde(default)]
    pub scheduled_transactions: Vec<ScheduledTransaction>,
}

impl Snapshot {
    /// Capture everything a source currently reports
    pub fn capture(source: &dyn BudgetSource) -> RiskResult<Self> {
        Ok(Self {
            accounts: source.accounts()?,
            scheduled_transactions: source.scheduled_transactions()?,
        })
    }

    /// Read a snapshot from a JSON file
    pub fn load(path: &Path) -> RiskResult<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            RiskError::Io(format!("Failed to read snapshot {}: {}", path.display(), e))
        })?;
        serde_json::from_str(&contents).map_err(|e| {
            RiskError::Json(format!("Failed to parse snapshot {}: {}", path.display(), e))
        })
    }

    /// Write the snapshot as pretty-printed JSON
    pub fn save(&self, path: &Path) -> RiskResult<()> {
        let contents = serde_json::to_string_pretty(self)?;
        fs::write(path, contents).map_err(|e| {
            RiskError::Io(format!("Failed to write snapshot {}: {}", path.display(), e))
        })
    }
}

impl BudgetSource for Snapshot {
    fn accounts(&self) -> RiskResult<Vec<Account>> {
        Ok(self
            .accounts
            .iter()
            .filter(|a| a.is_cash_account())
            .cloned()
            .collect())
    }

    fn scheduled_transactions(&self) -> RiskResult<Vec<ScheduledTransaction>> {
        Ok(self.scheduled_transactions.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AccountType, Milliunits};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn sample() -> Snapshot {
        let current = Account::new("Current", Milliunits::new(10_000));
        let card = Account::new("Card", Milliunits::new(-5_000)).with_type(AccountType::CreditCard);
        let rent = ScheduledTransaction::new(
            current.id,
            Milliunits::new(-8_000),
            NaiveDate::from_ymd_opt(2025, 6, 3).unwrap(),
        );
        Snapshot {
            accounts: vec![current, card],
            scheduled_transactions: vec![rent],
        }
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("snapshot.json");
        let snapshot = sample();

        snapshot.save(&path).unwrap();
        let loaded = Snapshot::load(&path).unwrap();
        assert_eq!(loaded, snapshot);
    }

    #[test]
    fn test_source_filters_debt_accounts() {
        let snapshot = sample();
        let accounts = snapshot.accounts().unwrap();
        assert_eq!(accounts.len(), 1);
        assert_eq!(accounts[0].name, "Current");
    }

    #[test]
    fn test_capture_from_source() {
        let captured = Snapshot::capture(&sample()).unwrap();
        assert_eq!(captured.accounts.len(), 1);
        assert_eq!(captured.scheduled_transactions.len(), 1);
    }

    #[test]
    fn test_load_missing_file() {
        let err = Snapshot::load(Path::new("/no/such/snapshot.json")).unwrap_err();
        assert!(matches!(err, RiskError::Io(_)));
    }

    #[test]
    fn test_load_invalid_json() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("broken.json");
        fs::write(&path, "{not json").unwrap();
        assert!(matches!(Snapshot::load(&path), Err(RiskError::Json(_))));
    }
}
