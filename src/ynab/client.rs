//! Blocking HTTP client for the YNAB API

use reqwest::blocking::Client;
use reqwest::header::ACCEPT;
use serde::de::DeserializeOwned;
use std::time::Duration;

use super::wire::{self, AccountsData, Envelope, ScheduledTransactionsData};
use super::BudgetSource;
use crate::config::{ApiToken, Settings};
use crate::error::{RiskError, RiskResult};
use crate::models::{Account, ScheduledTransaction};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Reads one budget's accounts and scheduled transactions
#[derive(Debug)]
pub struct YnabClient {
    http: Client,
    api_base: String,
    budget_id: String,
    token: ApiToken,
}

impl YnabClient {
    /// Create a client from run settings; requires a token
    pub fn new(settings: &Settings) -> RiskResult<Self> {
        settings.validate()?;
        let token = settings.require_token()?.clone();
        let http = Client::builder()
            .user_agent(concat!("ynab-risk/", env!("CARGO_PKG_VERSION")))
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            http,
            api_base: settings.api_base.trim_end_matches('/').to_string(),
            budget_id: settings.budget_id.clone(),
            token,
        })
    }

    fn budget_url(&self, path: &str) -> String {
        format!("{}/budgets/{}{}", self.api_base, self.budget_id, path)
    }

    fn get<T: DeserializeOwned>(&self, path: &str) -> RiskResult<T> {
        let url = self.budget_url(path);
        tracing::info!(budget = %self.budget_id, path, "requesting YNAB data");

        let response = self
            .http
            .get(&url)
            .bearer_auth(self.token.expose())
            .header(ACCEPT, "application/json")
            .send()?;
        let status = response.status();
        let body = response.text()?;

        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), path, "YNAB request failed");
            return Err(RiskError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let envelope: Envelope<T> = serde_json::from_str(&body)
            .map_err(|e| RiskError::Json(format!("Unexpected response from YNAB: {}", e)))?;
        Ok(envelope.data)
    }
}

impl BudgetSource for YnabClient {
    fn accounts(&self) -> RiskResult<Vec<Account>> {
        let data: AccountsData = self.get("/accounts")?;
        let total = data.accounts.len();
        let accounts = wire::cash_accounts(data);
        tracing::info!(total, cash = accounts.len(), "fetched accounts");
        Ok(accounts)
    }

    fn scheduled_transactions(&self) -> RiskResult<Vec<ScheduledTransaction>> {
        let data: ScheduledTransactionsData = self.get("/scheduled_transactions")?;
        let scheduled = wire::scheduled_transactions(data);
        tracing::info!(count = scheduled.len(), "fetched scheduled transactions");
        Ok(scheduled)
    }
}
