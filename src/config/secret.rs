//! API token handling
//!
//! The personal access token is wiped from memory on drop and never shows
//! up in `Debug` or `Display` output.

use std::fmt;
use zeroize::Zeroizing;

/// A YNAB personal access token
#[derive(Clone)]
pub struct ApiToken {
    inner: Zeroizing<String>,
}

impl ApiToken {
    /// Wrap a token, trimming surrounding whitespace
    pub fn new(token: impl Into<String>) -> Self {
        let raw = Zeroizing::new(token.into());
        Self {
            inner: Zeroizing::new(raw.trim().to_string()),
        }
    }

    /// Get the token contents
    pub fn expose(&self) -> &str {
        &self.inner
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl From<String> for ApiToken {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

// Don't print the contents in Debug output
impl fmt::Debug for ApiToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiToken")
            .field("len", &self.inner.len())
            .finish()
    }
}

// Don't print the contents in Display output
impl fmt::Display for ApiToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[REDACTED {} bytes]", self.inner.len())
    }
}
