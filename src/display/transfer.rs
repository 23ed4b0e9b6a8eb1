//! Suggested cover transfers and uncovered drops

use super::report::{join_names, underlined};
use super::DisplayOptions;
use crate::forecast::SuggestionPlan;

pub const TRANSFERS_HEADER: &str =
    "Suggested cover transfers (longest window projection; only full coverage shown)";

pub const UNCOVERED_HEADER: &str =
    "Uncovered drops (insufficient surplus, no partial moves suggested):";

/// Format the transfer plan
pub fn format_transfers(plan: &SuggestionPlan, options: &DisplayOptions) -> String {
    let mut output = underlined(TRANSFERS_HEADER);

    if plan.transfers.is_empty() {
        output.push_str("None\n");
    } else {
        for transfer in &plan.transfers {
            output.push_str(&format!(
                "Move {} from {} to {}, {}\n",
                options.money(transfer.amount),
                transfer.from_name,
                transfer.to_name,
                transfer.rationale(),
            ));
        }
    }
    output.push('\n');

    if !plan.uncovered.is_empty() {
        output.push_str(UNCOVERED_HEADER);
        output.push('\n');
        for shortfall in &plan.uncovered {
            output.push_str(&format!(
                "{}: need {}, available {} :: {}\n",
                shortfall.drop_date,
                options.money(shortfall.need),
                options.money(shortfall.available),
                join_names(&shortfall.account_names),
            ));
        }
        output.push('\n');
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forecast::{TransferSuggestion, UncoveredShortfall};
    use crate::models::{AccountId, Milliunits};
    use chrono::NaiveDate;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 6).unwrap()
    }

    #[test]
    fn test_empty_plan() {
        let text = format_transfers(&SuggestionPlan::default(), &DisplayOptions::plain("£"));
        assert!(text.ends_with("None\n\n"));
        assert!(!text.contains("Uncovered"));
    }

    #[test]
    fn test_moves_and_uncovered() {
        let plan = SuggestionPlan {
            transfers: vec![TransferSuggestion {
                from_account: AccountId::new(),
                from_name: "Savings".into(),
                to_account: AccountId::new(),
                to_name: "Joint".into(),
                amount: Milliunits::from_units(50),
                covers_drop_on: date(),
            }],
            uncovered: vec![UncoveredShortfall {
                drop_date: date(),
                need: Milliunits::from_units(70),
                available: Milliunits::from_units(50),
                accounts: vec![AccountId::new(), AccountId::new()],
                account_names: vec!["Bills".into(), "Kids".into()],
            }],
        };

        let text = format_transfers(&plan, &DisplayOptions::plain("£"));
        assert!(text.contains("Move £50.00 from Savings to Joint, covers drop on 2025-06-06\n"));
        assert!(text.contains(UNCOVERED_HEADER));
        assert!(text.contains("2025-06-06: need £70.00, available £50.00 :: Bills, Kids\n"));
    }
}
