//! Forward-looking projection windows
//!
//! A window of N days covers the inclusive date range `[today, today + N]`.

use chrono::{Days, NaiveDate};
use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::error::{RiskError, RiskResult};

/// Windows used when none are requested explicitly
pub const DEFAULT_WINDOWS: [u32; 3] = [3, 7, 30];

/// A positive day count
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Window(u32);

impl Window {
    /// Create a window, rejecting zero
    pub fn new(days: u32) -> RiskResult<Self> {
        if days == 0 {
            return Err(RiskError::invalid_window("0"));
        }
        Ok(Self(days))
    }

    /// Number of days covered after today
    pub const fn days(&self) -> u32 {
        self.0
    }

    /// Last date inside the window (inclusive)
    pub fn cutoff(&self, today: NaiveDate) -> NaiveDate {
        today
            .checked_add_days(Days::new(u64::from(self.0)))
            .unwrap_or(NaiveDate::MAX)
    }

    /// Check whether `date` falls inside the window starting at `today`
    pub fn contains(&self, today: NaiveDate, date: NaiveDate) -> bool {
        date >= today && date <= self.cutoff(today)
    }
}

impl FromStr for Window {
    type Err = RiskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let days: i64 = trimmed
            .parse()
            .map_err(|_| RiskError::invalid_window(trimmed))?;
        if days <= 0 || days > i64::from(u32::MAX) {
            return Err(RiskError::invalid_window(trimmed));
        }
        Ok(Self(days as u32))
    }
}

impl fmt::Display for Window {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} days", self.0)
    }
}

/// A deduplicated, ascending set of windows
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct WindowSet(BTreeSet<Window>);

impl WindowSet {
    /// Build a set from day counts; every value must be positive
    pub fn from_days(days: impl IntoIterator<Item = u32>) -> RiskResult<Self> {
        days.into_iter()
            .map(Window::new)
            .collect::<RiskResult<BTreeSet<_>>>()
            .map(Self)
    }

    /// Parse a comma-separated list such as `"3,7,30"`.
    ///
    /// Blank entries are ignored. A list with no values at all is an
    /// `EmptyWindowSet` error.
    pub fn parse(list: &str) -> RiskResult<Self> {
        let windows = list
            .split(',')
            .filter(|part| !part.trim().is_empty())
            .map(Window::from_str)
            .collect::<RiskResult<BTreeSet<_>>>()?;
        if windows.is_empty() {
            return Err(RiskError::EmptyWindowSet);
        }
        Ok(Self(windows))
    }

    /// The longest window, used for transfer suggestions
    pub fn largest(&self) -> Option<Window> {
        self.0.iter().next_back().copied()
    }

    /// Iterate windows in ascending order
    pub fn iter(&self) -> impl Iterator<Item = Window> + '_ {
        self.0.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for WindowSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.0.iter().map(|w| w.days().to_string()).collect();
        f.write_str(&parts.join(","))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_dedups_and_sorts() {
        let set = WindowSet::parse("30, 7,3,7").unwrap();
        let days: Vec<u32> = set.iter().map(|w| w.days()).collect();
        assert_eq!(days, vec![3, 7, 30]);
        assert_eq!(set.largest().map(|w| w.days()), Some(30));
        assert_eq!(set.to_string(), "3,7,30");
    }

    #[test]
    fn test_parse_skips_blank_entries() {
        let set = WindowSet::parse("3,,7,").unwrap();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_parse_rejects_bad_values() {
        assert!(WindowSet::parse("3,abc").unwrap_err().is_invalid_window());
        assert!(WindowSet::parse("0").unwrap_err().is_invalid_window());
        assert!(WindowSet::parse("-5").unwrap_err().is_invalid_window());
        assert!(WindowSet::parse("2.5").unwrap_err().is_invalid_window());
    }

    #[test]
    fn test_parse_empty_list() {
        assert!(matches!(
            WindowSet::parse(" , "),
            Err(RiskError::EmptyWindowSet)
        ));
    }

    #[test]
    fn test_single_window_is_largest() {
        let set = WindowSet::from_days([7]).unwrap();
        assert_eq!(set.largest().map(|w| w.days()), Some(7));
    }

    #[test]
    fn test_empty_set_has_no_largest() {
        let set = WindowSet::from_days(std::iter::empty()).unwrap();
        assert!(set.is_empty());
        assert!(set.largest().is_none());
    }

    #[test]
    fn test_cutoff_is_inclusive() {
        let window = Window::new(7).unwrap();
        let today = date(2025, 1, 1);
        assert_eq!(window.cutoff(today), date(2025, 1, 8));
        assert!(window.contains(today, date(2025, 1, 8)));
        assert!(window.contains(today, today));
        assert!(!window.contains(today, date(2025, 1, 9)));
        assert!(!window.contains(today, date(2024, 12, 31)));
    }
}
