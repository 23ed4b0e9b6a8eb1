//! Recurrence rules for scheduled transactions

use chrono::{Days, Months, NaiveDate};
use serde::{Deserialize, Serialize};

/// How often a scheduled transaction repeats, using YNAB's names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum Frequency {
    #[default]
    Never,
    Daily,
    Weekly,
    EveryOtherWeek,
    TwiceAMonth,
    #[serde(rename = "every4Weeks")]
    Every4Weeks,
    Monthly,
    EveryOtherMonth,
    #[serde(rename = "every3Months")]
    Every3Months,
    #[serde(rename = "every4Months")]
    Every4Months,
    TwiceAYear,
    Yearly,
    EveryOtherYear,
    /// Unrecognized rule; treated as a one-off
    #[serde(other)]
    Unknown,
}

enum Step {
    Days(u64),
    Months(u32),
}

impl Frequency {
    fn step(&self) -> Option<Step> {
        match self {
            Self::Never | Self::Unknown => None,
            Self::Daily => Some(Step::Days(1)),
            Self::Weekly => Some(Step::Days(7)),
            Self::EveryOtherWeek => Some(Step::Days(14)),
            Self::TwiceAMonth => Some(Step::Days(15)),
            Self::Every4Weeks => Some(Step::Days(28)),
            Self::Monthly => Some(Step::Months(1)),
            Self::EveryOtherMonth => Some(Step::Months(2)),
            Self::Every3Months => Some(Step::Months(3)),
            Self::Every4Months => Some(Step::Months(4)),
            Self::TwiceAYear => Some(Step::Months(6)),
            Self::Yearly => Some(Step::Months(12)),
            Self::EveryOtherYear => Some(Step::Months(24)),
        }
    }

    /// The occurrence following `current`, or `None` for one-off rules.
    ///
    /// Month steps clamp to the last day of the target month, so a schedule
    /// on the 31st lands on the 30th (or 28th/29th) in shorter months.
    pub fn next_date(&self, current: NaiveDate) -> Option<NaiveDate> {
        match self.step()? {
            Step::Days(days) => current.checked_add_days(Days::new(days)),
            Step::Months(months) => current.checked_add_months(Months::new(months)),
        }
    }
}
