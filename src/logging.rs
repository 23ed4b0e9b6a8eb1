//! Tracing setup
//!
//! Logs go to stderr so report output on stdout stays clean for piping.

use std::sync::Once;
use tracing_subscriber::{fmt, EnvFilter};

static TRACING_INIT: Once = Once::new();

/// Filter directive for a `-v` count: warn, info, then debug
pub fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "ynab_risk=warn",
        1 => "ynab_risk=info",
        _ => "ynab_risk=debug",
    }
}

/// Initializes the global tracing subscriber.
///
/// `RUST_LOG` wins when set; otherwise the verbosity picks the level.
pub fn init_tracing(verbosity: u8) {
    TRACING_INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

        fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .init();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive() {
        assert_eq!(default_directive(0), "ynab_risk=warn");
        assert_eq!(default_directive(1), "ynab_risk=info");
        assert_eq!(default_directive(5), "ynab_risk=debug");
    }

    #[test]
    fn init_does_not_panic_twice() {
        init_tracing(0);
        init_tracing(2);
    }
}
