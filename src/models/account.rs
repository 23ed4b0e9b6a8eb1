//! Account model
//!
//! A snapshot of one budget account as reported by YNAB. Balances are taken
//! at fetch time and never change during a run.

use serde::{Deserialize, Serialize};

use super::ids::AccountId;
use super::money::Milliunits;

/// Type of budget account, using YNAB's names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum AccountType {
    #[default]
    Checking,
    Savings,
    Cash,
    CreditCard,
    LineOfCredit,
    OtherAsset,
    OtherLiability,
    Mortgage,
    AutoLoan,
    StudentLoan,
    PersonalLoan,
    MedicalDebt,
    OtherDebt,
    /// Any type this tool does not know about
    #[serde(other)]
    Other,
}

impl AccountType {
    /// Returns true for credit, loan and other liability accounts
    pub fn is_debt(&self) -> bool {
        matches!(
            self,
            Self::CreditCard
                | Self::LineOfCredit
                | Self::Mortgage
                | Self::AutoLoan
                | Self::StudentLoan
                | Self::PersonalLoan
                | Self::MedicalDebt
                | Self::OtherDebt
                | Self::OtherLiability
        )
    }
}

/// A budget account with its current balance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Unique identifier
    pub id: AccountId,

    /// Display name (e.g., "Joint Current")
    pub name: String,

    /// Type of account
    #[serde(rename = "type", default)]
    pub account_type: AccountType,

    /// Whether this account is included in the budget
    #[serde(default = "default_on_budget")]
    pub on_budget: bool,

    /// Current balance
    #[serde(default)]
    pub balance: Milliunits,
}

fn default_on_budget() -> bool {
    true
}

impl Account {
    /// Create an on-budget checking account with the given balance
    pub fn new(name: impl Into<String>, balance: Milliunits) -> Self {
        Self {
            id: AccountId::new(),
            name: name.into(),
            account_type: AccountType::Checking,
            on_budget: true,
            balance,
        }
    }

    /// Set the account type
    pub fn with_type(mut self, account_type: AccountType) -> Self {
        self.account_type = account_type;
        self
    }

    /// Returns true for on-budget, non-debt accounts
    pub fn is_cash_account(&self) -> bool {
        self.on_budget && !self.account_type.is_debt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_account_is_cash() {
        let account = Account::new("Current", Milliunits::from_units(10));
        assert!(account.is_cash_account());
        assert_eq!(account.balance.value(), 10_000);
    }

    #[test]
    fn test_debt_accounts_are_not_cash() {
        let card = Account::new("Card", Milliunits::zero()).with_type(AccountType::CreditCard);
        assert!(!card.is_cash_account());

        let mortgage = Account::new("House", Milliunits::zero()).with_type(AccountType::Mortgage);
        assert!(!mortgage.is_cash_account());
    }

    #[test]
    fn test_off_budget_is_not_cash() {
        let mut account = Account::new("Tracking", Milliunits::zero());
        account.on_budget = false;
        assert!(!account.is_cash_account());
    }

    #[test]
    fn test_account_type_wire_names() {
        let parsed: AccountType = serde_json::from_str("\"lineOfCredit\"").unwrap();
        assert_eq!(parsed, AccountType::LineOfCredit);

        let unknown: AccountType = serde_json::from_str("\"somethingNew\"").unwrap();
        assert_eq!(unknown, AccountType::Other);
        assert!(!unknown.is_debt());
    }
}
