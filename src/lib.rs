//! ynab-risk - flag budget accounts that may go negative soon
//!
//! This library reads a YNAB budget's cash accounts and scheduled
//! transactions, projects each account's balance over a set of day windows,
//! and suggests transfers from accounts with spare cash to cover projected
//! shortfalls. It never writes to the budget.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Run settings, dotenv loading and the API token
//! - `error`: Custom error types
//! - `models`: Snapshot data models (accounts, scheduled transactions, windows)
//! - `forecast`: Window projection and transfer suggestion (pure, no I/O)
//! - `ynab`: Data sources (live API client and JSON snapshots)
//! - `display`: Terminal report formatting
//! - `export`: JSON, YAML and CSV output
//! - `logging`: Tracing subscriber setup
//!
//! # Example
//!
//! ```rust,ignore
//! use ynab_risk::config::Settings;
//! use ynab_risk::forecast::Forecast;
//! use ynab_risk::ynab::{BudgetSource, YnabClient};
//!
//! let settings = Settings::default().with_token(Some(token));
//! let client = YnabClient::new(&settings)?;
//! let report = Forecast::run(
//!     &client.accounts()?,
//!     &client.scheduled_transactions()?,
//!     &settings.windows,
//!     settings.today,
//! );
//! ```

pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod forecast;
pub mod logging;
pub mod models;
pub mod ynab;

pub use error::{RiskError, RiskResult};
