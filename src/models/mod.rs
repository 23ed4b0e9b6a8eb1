//! Core data models for ynab-risk
//!
//! This module contains the immutable snapshot types the forecast works on:
//! accounts, scheduled transactions, recurrence rules, amounts and windows.

pub mod account;
pub mod frequency;
pub mod ids;
pub mod money;
pub mod scheduled;
pub mod window;

pub use account::{Account, AccountType};
pub use frequency::Frequency;
pub use ids::{AccountId, ScheduledTransactionId};
pub use money::{Milliunits, DEFAULT_CURRENCY_SYMBOL};
pub use scheduled::ScheduledTransaction;
pub use window::{Window, WindowSet, DEFAULT_WINDOWS};
