//! Run settings for ynab-risk
//!
//! Everything a run needs is gathered here once, at startup, and passed
//! explicitly to the fetcher and the forecast. Nothing below this layer
//! reads the environment.

use chrono::{Local, NaiveDate};

use super::secret::ApiToken;
use crate::error::{RiskError, RiskResult};
use crate::models::{WindowSet, DEFAULT_CURRENCY_SYMBOL, DEFAULT_WINDOWS};

/// Default YNAB API root
pub const DEFAULT_API_BASE: &str = "https://api.ynab.com/v1";

/// Budget alias YNAB resolves to the most recently opened budget
pub const DEFAULT_BUDGET_ID: &str = "last-used";

/// Settings for one run
#[derive(Debug, Clone)]
pub struct Settings {
    /// Personal access token; only needed when talking to the API
    pub token: Option<ApiToken>,

    /// Budget to read from
    pub budget_id: String,

    /// API root URL, without trailing slash
    pub api_base: String,

    /// Symbol used when printing amounts
    pub currency_symbol: String,

    /// Windows to project
    pub windows: WindowSet,

    /// First day of every window
    pub today: NaiveDate,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            token: None,
            budget_id: DEFAULT_BUDGET_ID.to_string(),
            api_base: DEFAULT_API_BASE.to_string(),
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
            windows: WindowSet::from_days(DEFAULT_WINDOWS).unwrap_or_default(),
            today: Local::now().date_naive(),
        }
    }
}

impl Settings {
    /// Set the API token, ignoring blank values
    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token.map(ApiToken::new).filter(|t| !t.is_empty());
        self
    }

    /// The token, or a configuration error when none was supplied
    pub fn require_token(&self) -> RiskResult<&ApiToken> {
        self.token.as_ref().ok_or_else(|| {
            RiskError::Config("YNAB token is required (pass --token or set YNAB_TOKEN).".into())
        })
    }

    /// Check the fields the fetcher relies on
    pub fn validate(&self) -> RiskResult<()> {
        if self.budget_id.trim().is_empty() {
            return Err(RiskError::Config("Budget id cannot be empty".into()));
        }
        if !(self.api_base.starts_with("https://") || self.api_base.starts_with("http://")) {
            return Err(RiskError::Config(format!(
                "API base must be an http(s) URL: {}",
                self.api_base
            )));
        }
        Ok(())
    }

    /// Normalize the API base by dropping trailing slashes
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into().trim_end_matches('/').to_string();
        self
    }
}

/// Parse a `--today` override, falling back to the local date
pub fn parse_today(value: Option<&str>) -> RiskResult<NaiveDate> {
    match value {
        Some(raw) => NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|e| {
            RiskError::Config(format!("Invalid date '{}': {}. Use YYYY-MM-DD", raw, e))
        }),
        None => Ok(Local::now().date_naive()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.budget_id, "last-used");
        assert_eq!(settings.api_base, DEFAULT_API_BASE);
        assert_eq!(settings.currency_symbol, "£");
        assert_eq!(settings.windows.to_string(), "3,7,30");
        assert!(settings.token.is_none());
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_require_token() {
        let settings = Settings::default();
        assert!(matches!(
            settings.require_token(),
            Err(RiskError::Config(_))
        ));

        let settings = Settings::default().with_token(Some("abc".into()));
        assert_eq!(settings.require_token().unwrap().expose(), "abc");

        let settings = Settings::default().with_token(Some("  ".into()));
        assert!(settings.token.is_none());
    }

    #[test]
    fn test_api_base_is_normalized_and_validated() {
        let settings = Settings::default().with_api_base("http://localhost:8080/v1/");
        assert_eq!(settings.api_base, "http://localhost:8080/v1");
        assert!(settings.validate().is_ok());

        let settings = Settings::default().with_api_base("ftp://example.com");
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_parse_today() {
        assert_eq!(
            parse_today(Some("2025-02-03")).unwrap(),
            NaiveDate::from_ymd_opt(2025, 2, 3).unwrap()
        );
        assert!(parse_today(Some("03/02/2025")).is_err());
        assert!(parse_today(None).is_ok());
    }
}
